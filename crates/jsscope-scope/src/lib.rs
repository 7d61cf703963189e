//! Scope tracking and redeclaration checks for ECMAScript parsers.
//!
//! This crate provides:
//! - `ScopeFlags` / `BindingFlags` - region and declaration classification
//! - `Scope` / `ScopeRecord` - per-region name sets
//! - `ScopeHandler` - the scope stack, redeclaration rules and pending exports
//! - `ScopeError` - the redeclaration failure

pub mod error;
pub mod flags;
pub mod handler;
pub mod options;
pub mod scope;

pub use error::ScopeError;
pub use flags::{BindingFlags, BindingScope, ScopeFlags};
pub use handler::ScopeHandler;
pub use options::ScopeOptions;
pub use scope::{FxIndexMap, NameSet, Scope, ScopeBindings, ScopeRecord};

#[cfg(test)]
#[path = "tests/flags_tests.rs"]
mod flags_tests;
