//! Moving a plugin relative to an anchor plugin.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Something identified by a unique name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Where to place a plugin relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Before,
    After,
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Error for an order that is neither `before` nor `after`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order {0:?}: expected \"before\" or \"after\"")]
pub struct ParseOrderError(pub String);

/// Move the plugin named `moved` directly before or after the plugin named
/// `anchor`.
///
/// Nothing happens when either name is missing or when the plugins are
/// already in the requested relative order. Returns whether the slice changed.
pub fn move_plugin<T: Named>(plugins: &mut [T], moved: &str, order: Order, anchor: &str) -> bool {
    let Some(anchor_index) = plugins.iter().position(|p| p.name() == anchor) else {
        tracing::debug!("Anchor plugin {} not found, leaving order unchanged", anchor);
        return false;
    };

    let Some(moved_index) = plugins.iter().position(|p| p.name() == moved) else {
        tracing::debug!("Plugin {} not found, leaving order unchanged", moved);
        return false;
    };

    // Removing and reinserting at the anchor's original index shifts only
    // the plugins in between by one.
    match order {
        Order::Before if moved_index > anchor_index => {
            plugins[anchor_index..=moved_index].rotate_right(1);
        }
        Order::After if moved_index < anchor_index => {
            plugins[moved_index..=anchor_index].rotate_left(1);
        }
        _ => return false,
    }

    tracing::debug!("Moved plugin {} {} {}", moved, order, anchor);
    true
}
