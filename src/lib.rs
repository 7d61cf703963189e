//! jsscope: scope tracking and redeclaration checks for ECMAScript parsers.
//!
//! The rule engine lives in `jsscope-scope`; shared positions and
//! diagnostics live in `jsscope-common`. This crate re-exports both and adds
//! tracing set-up and the scope-trace replay driver used by the
//! `jsscope-replay` binary.

pub use jsscope_common as common;
pub use jsscope_common::{Diagnostic, DiagnosticCategory, Position, SourceType};
pub use jsscope_scope as scope;
pub use jsscope_scope::{
    BindingFlags, Scope, ScopeError, ScopeFlags, ScopeHandler, ScopeOptions, ScopeRecord,
};

// Tracing subscriber set-up (JSSCOPE_LOG / JSSCOPE_LOG_FORMAT)
pub mod tracing_config;

// Replaying recorded enter/exit/declare/export events
pub mod replay;
