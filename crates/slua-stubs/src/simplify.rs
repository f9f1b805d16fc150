//! Argument name simplification.
//!
//! Dictionary argument names sometimes carry decorations that only make sense
//! in documentation. A [`NameSimplifier`] normalizes them before they are
//! written into a stub's parameter list.

use regex::Regex;
use serde::Deserialize;

/// Normalizes an argument name.
pub trait NameSimplifier: Send + Sync {
    fn simplify(&self, name: &str) -> String;
}

/// Leaves names untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl NameSimplifier for Identity {
    fn simplify(&self, name: &str) -> String {
        name.to_string()
    }
}

impl<F> NameSimplifier for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn simplify(&self, name: &str) -> String {
        self(name)
    }
}

/// A regex replacement applied to argument names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Replacement {
    pub pattern: String,
    #[serde(default)]
    pub with: String,
}

/// Configurable simplifier: strip one prefix, strip one suffix, then apply
/// replacements in order.
#[derive(Debug, Clone, Default)]
pub struct RuleSimplifier {
    strip_prefixes: Vec<String>,
    strip_suffixes: Vec<String>,
    replacements: Vec<(Regex, String)>,
}

impl RuleSimplifier {
    /// Build a simplifier, compiling every replacement pattern.
    pub fn new(
        strip_prefixes: Vec<String>,
        strip_suffixes: Vec<String>,
        replacements: &[Replacement],
    ) -> Result<Self, SimplifyError> {
        let replacements = replacements
            .iter()
            .map(|r| {
                Regex::new(&r.pattern)
                    .map(|re| (re, r.with.clone()))
                    .map_err(|e| SimplifyError::InvalidPattern {
                        pattern: r.pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            strip_prefixes,
            strip_suffixes,
            replacements,
        })
    }

    /// Check if this simplifier would change anything at all.
    pub fn is_noop(&self) -> bool {
        self.strip_prefixes.is_empty()
            && self.strip_suffixes.is_empty()
            && self.replacements.is_empty()
    }
}

impl NameSimplifier for RuleSimplifier {
    fn simplify(&self, name: &str) -> String {
        let mut current = name;

        if let Some(rest) = self
            .strip_prefixes
            .iter()
            .find_map(|p| name.strip_prefix(p.as_str()))
        {
            if !rest.is_empty() {
                current = rest;
            }
        }

        let unprefixed = current;
        if let Some(rest) = self
            .strip_suffixes
            .iter()
            .find_map(|s| unprefixed.strip_suffix(s.as_str()))
        {
            if !rest.is_empty() {
                current = rest;
            }
        }

        let mut result = current.to_string();
        for (re, with) in &self.replacements {
            result = re.replace_all(&result, with.as_str()).into_owned();
        }

        // Never emit an empty parameter name
        if result.is_empty() {
            return name.to_string();
        }

        result
    }
}

/// Errors that can occur when building a simplifier.
#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    #[error("Invalid replacement pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
