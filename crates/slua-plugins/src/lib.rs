//! Build plugin ordering.
//!
//! Site builds run a list of named plugins in order. Some plugins must run
//! relative to others, so this crate moves a named plugin directly before or
//! after an anchor plugin while leaving every other plugin where it was.

pub mod reorder;
pub mod rules;

pub use reorder::{move_plugin, Named, Order, ParseOrderError};
pub use rules::{apply_rules, OrderRule, PluginDescriptor};
