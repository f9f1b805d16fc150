//! Keyword dictionary data model.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, falling back to its default when it is `null` or
/// has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a property map entry by entry, so one malformed entry only
/// degrades itself to [`PropertyKind::Other`].
fn lenient_props<'de, D>(deserializer: D) -> Result<IndexMap<String, Property>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(IndexMap::new());
    };

    Ok(entries
        .into_iter()
        .map(|(name, value)| (name, Property::deserialize(value).unwrap_or_default()))
        .collect())
}

/// Root of a keyword dictionary.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Keywords {
    /// Global scope of the scripting environment
    #[serde(default, deserialize_with = "lenient")]
    pub global: Global,
}

/// The global scope: every top-level identifier in insertion order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Global {
    #[serde(default, deserialize_with = "lenient_props")]
    pub props: IndexMap<String, Property>,
}

/// Discriminator of a dictionary entry (the `def` field).
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Callable function
    Func,
    /// Namespace table holding nested properties
    Table,
    /// Constants, variables, events and anything else
    #[default]
    #[serde(other)]
    Other,
}

/// A single entry in the dictionary.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Property {
    #[serde(default, deserialize_with = "lenient")]
    pub def: PropertyKind,

    /// Overloads of a function; only the first one is used
    #[serde(default, deserialize_with = "lenient")]
    pub signatures: Vec<Signature>,

    /// Members of a table
    #[serde(default, deserialize_with = "lenient_props")]
    pub props: IndexMap<String, Property>,
}

impl Property {
    /// Check if this entry is a function.
    pub fn is_func(&self) -> bool {
        self.def == PropertyKind::Func
    }

    /// Check if this entry is a table.
    pub fn is_table(&self) -> bool {
        self.def == PropertyKind::Table
    }

    /// The signature used for stubs, if any.
    pub fn first_signature(&self) -> Option<&Signature> {
        self.signatures.first()
    }
}

/// Function signature.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Signature {
    #[serde(default, deserialize_with = "lenient")]
    pub args: Vec<Argument>,

    #[serde(default, deserialize_with = "lenient")]
    pub result: Vec<ResultType>,
}

impl Signature {
    /// Type of the first result entry.
    pub fn return_type(&self) -> Option<&Type> {
        self.result.first().and_then(|r| r.ty.as_ref())
    }
}

/// A named, typed function argument.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Argument {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(rename = "type", default)]
    pub ty: Option<Type>,
}

/// One entry of a signature's result list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResultType {
    #[serde(rename = "type", default)]
    pub ty: Option<Type>,
}

/// Type of an argument or result.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Type {
    /// A single type name, e.g. `"string"`
    Name(String),
    /// Candidate descriptors in priority order
    Union(Vec<TypeDescriptor>),
    /// Any other shape; carries no usable name
    Unrecognized(serde_json::Value),
}

impl Type {
    /// Type names carried by this type, in order.
    pub fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Name(name) => Box::new(std::iter::once(name.as_str())),
            Self::Union(descriptors) => Box::new(descriptors.iter().filter_map(|d| d.name())),
            Self::Unrecognized(_) => Box::new(std::iter::empty()),
        }
    }

    /// First type name, used when annotating arguments.
    ///
    /// Descriptors without a name are skipped, so `[7, "string"]` yields
    /// `string` rather than falling back to `any` on the first entry.
    pub fn display_name(&self) -> Option<&str> {
        self.names().next()
    }
}

/// One candidate in a union type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Name(String),
    Described {
        #[serde(default)]
        value: Option<String>,
    },
    Unrecognized(serde_json::Value),
}

impl TypeDescriptor {
    /// Type name of this descriptor, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Described { value } => value.as_deref(),
            Self::Unrecognized(_) => None,
        }
    }
}
