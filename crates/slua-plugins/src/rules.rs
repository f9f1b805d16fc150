//! Declarative plugin ordering rules.

use serde::Deserialize;

use crate::reorder::{move_plugin, Named, Order};

/// A build plugin, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct PluginDescriptor {
    pub name: String,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for PluginDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Plugins may be written as a bare name or as a table with a `name` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescriptor {
    Name(String),
    Table { name: String },
}

impl From<RawDescriptor> for PluginDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        match raw {
            RawDescriptor::Name(name) | RawDescriptor::Table { name } => Self { name },
        }
    }
}

/// Place `plugin` before or after `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRule {
    pub plugin: String,
    pub order: Order,
    pub anchor: String,
}

impl OrderRule {
    /// Apply this rule. Returns whether anything moved.
    pub fn apply<T: Named>(&self, plugins: &mut [T]) -> bool {
        move_plugin(plugins, &self.plugin, self.order, &self.anchor)
    }
}

/// Apply rules in sequence and return how many of them moved a plugin.
pub fn apply_rules<T: Named>(plugins: &mut [T], rules: &[OrderRule]) -> usize {
    rules.iter().filter(|rule| rule.apply(plugins)).count()
}
