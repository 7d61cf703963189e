//! Common types and utilities for the jsscope scope tracker.
//!
//! This crate provides foundational types used across all jsscope crates:
//! - Source positions (`Position`)
//! - Common enums (`SourceType`)
//! - Diagnostics and the diagnostic message table

// Common types - Shared constants to break circular dependencies
pub mod common;
pub use common::SourceType;

// Position types for line/column/offset source locations
pub mod position;
pub use position::Position;

pub mod diagnostics;
pub use diagnostics::{
    DIAGNOSTIC_MESSAGES, Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes,
    format_message, get_message_template,
};

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
