//! Keyword dictionary model and loading.
//!
//! This crate describes the structured keyword dictionary that lists the
//! global functions and tables of the SLua scripting environment, and loads
//! it from JSON or YAML while preserving the order of every mapping.

pub mod loader;
pub mod model;

pub use loader::{load_keywords, Format, LoadError};
pub use model::{
    Argument, Global, Keywords, Property, PropertyKind, ResultType, Signature, Type,
    TypeDescriptor,
};
