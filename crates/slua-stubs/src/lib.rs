//! Placeholder stub generation for SLua keyword dictionaries.
//!
//! Turns a keyword dictionary into Luau source where every global function
//! and table function is defined with a body that returns a default value
//! matching its declared result type. The output exists to satisfy static
//! analysis tooling, not to run.

pub mod generator;
pub mod placeholder;
pub mod simplify;
pub mod writer;

pub use generator::{GenerateError, Stub, StubGenerator, CODEGEN_HEADER};
pub use placeholder::{resolve_placeholder, Placeholder};
pub use simplify::{Identity, NameSimplifier, Replacement, RuleSimplifier, SimplifyError};
pub use writer::{write_stubs, WriteError};
