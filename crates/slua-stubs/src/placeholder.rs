//! Mapping from declared types to placeholder return values.

use std::fmt;

use slua_keywords::Type;

/// Default value returned by a stub body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placeholder {
    #[default]
    Nil,
    EmptyString,
    Zero,
    ZeroVector,
    IdentityQuaternion,
    NullKey,
    EmptyTable,
}

impl Placeholder {
    /// Look up the placeholder for a single type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "nil" => Some(Self::Nil),
            "string" => Some(Self::EmptyString),
            "integer" | "number" => Some(Self::Zero),
            "vector" => Some(Self::ZeroVector),
            "quaternion" => Some(Self::IdentityQuaternion),
            "uuid" | "key" => Some(Self::NullKey),
            "list" => Some(Self::EmptyTable),
            _ => None,
        }
    }

    /// Luau literal for this placeholder.
    pub fn literal(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::EmptyString => "\"\"",
            Self::Zero => "0",
            Self::ZeroVector => "vector.zero",
            Self::IdentityQuaternion => "quaternion.identity",
            Self::NullKey => "NULL_KEY",
            Self::EmptyTable => "{}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Find the placeholder for the first recognized name of a type.
///
/// Returns `None` when the type is absent or none of its names are known.
/// Callers wanting the lenient behaviour use `unwrap_or_default()`, which
/// yields [`Placeholder::Nil`].
pub fn resolve_placeholder(ty: Option<&Type>) -> Option<Placeholder> {
    ty?.names().find_map(Placeholder::from_type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slua_keywords::TypeDescriptor;

    fn name(s: &str) -> Type {
        Type::Name(s.to_string())
    }

    #[test]
    fn maps_every_known_type() {
        let cases = [
            ("nil", "nil"),
            ("string", "\"\""),
            ("integer", "0"),
            ("number", "0"),
            ("vector", "vector.zero"),
            ("quaternion", "quaternion.identity"),
            ("uuid", "NULL_KEY"),
            ("key", "NULL_KEY"),
            ("list", "{}"),
        ];

        for (ty, literal) in cases {
            let placeholder = resolve_placeholder(Some(&name(ty))).unwrap();
            assert_eq!(placeholder.literal(), literal, "type {ty}");
        }
    }

    #[test]
    fn unknown_and_absent_types_are_unresolved() {
        assert_eq!(resolve_placeholder(Some(&name("boolean"))), None);
        assert_eq!(resolve_placeholder(None), None);
        assert_eq!(
            resolve_placeholder(Some(&name("table"))).unwrap_or_default(),
            Placeholder::Nil
        );
    }

    #[test]
    fn union_uses_first_recognized_entry() {
        let ty = Type::Union(vec![
            TypeDescriptor::Name("boolean".to_string()),
            TypeDescriptor::Described {
                value: Some("quaternion".to_string()),
            },
            TypeDescriptor::Name("string".to_string()),
        ]);

        assert_eq!(
            resolve_placeholder(Some(&ty)),
            Some(Placeholder::IdentityQuaternion)
        );
    }

    #[test]
    fn union_without_known_entries_is_unresolved() {
        let ty = Type::Union(vec![
            TypeDescriptor::Name("boolean".to_string()),
            TypeDescriptor::Described { value: None },
        ]);

        assert_eq!(resolve_placeholder(Some(&ty)), None);
        assert_eq!(resolve_placeholder(Some(&Type::Union(vec![]))), None);
    }

    #[test]
    fn displays_literal() {
        assert_eq!(Placeholder::EmptyTable.to_string(), "{}");
        assert_eq!(Placeholder::default().to_string(), "nil");
    }
}
