//! Luau stub source generator.

use std::fmt;

use slua_keywords::{Keywords, Property, Type};

use crate::placeholder::{resolve_placeholder, Placeholder};
use crate::simplify::{Identity, NameSimplifier};

/// Header written at the top of every generated file.
pub const CODEGEN_HEADER: &str = "\
-- this file is auto-generated by `slua-tips stubs`
-- do not edit directly, edit the keyword dictionary or the generator instead!
--# selene: allow(unscoped_variables, unused_variable, incorrect_standard_library_use)";

/// Type annotation used for arguments without a type name.
const ANY_TYPE: &str = "any";

/// A single placeholder function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Stub {
    /// Fully qualified name, e.g. `ll.Say`
    pub name: String,

    /// Parameter names and their type annotations
    pub params: Vec<(String, String)>,

    /// Value returned by the body
    pub placeholder: Placeholder,
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "{} = function({})\n\treturn {}\nend",
            self.name, params, self.placeholder
        )
    }
}

/// Generates stubs from a keyword dictionary.
pub struct StubGenerator {
    simplifier: Box<dyn NameSimplifier>,
    strict: bool,
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StubGenerator {
    /// Create a lenient generator that keeps argument names as they are.
    pub fn new() -> Self {
        Self::with_simplifier(Identity)
    }

    /// Create a generator with a custom argument name simplifier.
    pub fn with_simplifier(simplifier: impl NameSimplifier + 'static) -> Self {
        Self {
            simplifier: Box::new(simplifier),
            strict: false,
        }
    }

    /// Fail on incomplete entries and unknown result types instead of
    /// skipping them or falling back to `nil`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Collect stubs: all global functions first, then all table functions.
    pub fn collect(&self, keywords: &Keywords) -> Result<Vec<Stub>, GenerateError> {
        let props = &keywords.global.props;
        let mut stubs = Vec::new();

        for (name, prop) in props {
            if prop.is_func() {
                if let Some(stub) = self.stub_for(name.clone(), prop)? {
                    stubs.push(stub);
                }
            }
        }

        // Second pass, so table members always follow every global function
        for (table_name, table) in props {
            if !table.is_table() {
                continue;
            }
            for (name, prop) in &table.props {
                if prop.is_func() {
                    if let Some(stub) = self.stub_for(format!("{}.{}", table_name, name), prop)? {
                        stubs.push(stub);
                    }
                }
            }
        }

        Ok(stubs)
    }

    /// Generate the complete stub file contents.
    pub fn generate(&self, keywords: &Keywords) -> Result<String, GenerateError> {
        let stubs = self.collect(keywords)?;

        tracing::debug!("Generated {} stubs", stubs.len());

        let mut blocks = Vec::with_capacity(stubs.len() + 1);
        blocks.push(CODEGEN_HEADER.to_string());
        blocks.extend(stubs.iter().map(Stub::to_string));

        let mut output = blocks.join("\n\n");
        output.push('\n');
        Ok(output)
    }

    fn stub_for(&self, name: String, prop: &Property) -> Result<Option<Stub>, GenerateError> {
        let Some(signature) = prop.first_signature() else {
            if self.strict {
                return Err(GenerateError::MissingSignature(name));
            }
            tracing::warn!("Skipping {}: function has no signatures", name);
            return Ok(None);
        };

        if signature.result.is_empty() {
            if self.strict {
                return Err(GenerateError::MissingResult(name));
            }
            tracing::warn!("Skipping {}: signature has no result", name);
            return Ok(None);
        }

        let return_type = signature.return_type();
        let placeholder = match resolve_placeholder(return_type) {
            Some(placeholder) => placeholder,
            None if self.strict => {
                return Err(GenerateError::UnrecognizedType {
                    found: return_type
                        .and_then(Type::display_name)
                        .unwrap_or("none")
                        .to_string(),
                    name,
                });
            }
            None => Placeholder::Nil,
        };

        let params = signature
            .args
            .iter()
            .map(|arg| {
                let ty = arg
                    .ty
                    .as_ref()
                    .and_then(Type::display_name)
                    .unwrap_or(ANY_TYPE);
                (self.simplifier.simplify(&arg.name), ty.to_string())
            })
            .collect();

        Ok(Some(Stub {
            name,
            params,
            placeholder,
        }))
    }
}

/// Errors reported by a strict generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Function {0} has no signatures")]
    MissingSignature(String),

    #[error("First signature of {0} has no result")]
    MissingResult(String),

    #[error("Unrecognized result type for {name}: {found}")]
    UnrecognizedType { name: String, found: String },
}
