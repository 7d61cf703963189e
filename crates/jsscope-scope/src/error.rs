//! Errors produced while declaring names.

use jsscope_common::{Diagnostic, Position, diagnostic_codes};
use thiserror::Error;

/// A declaration that the current scope stack does not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The name is already bound in a way that conflicts with this declaration.
    #[error("Identifier '{name}' has already been declared ({at})")]
    VarRedeclaration {
        /// Identifier text
        name: String,
        /// Start of the offending (second) declaration
        at: Position,
    },
}

impl ScopeError {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ScopeError::VarRedeclaration { name, .. } => name,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            ScopeError::VarRedeclaration { at, .. } => *at,
        }
    }

    /// Convert into a diagnostic spanning the identifier.
    #[must_use]
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        match self {
            ScopeError::VarRedeclaration { name, at } => Diagnostic::from_code(
                file,
                at.index,
                name.len() as u32,
                diagnostic_codes::IDENTIFIER_HAS_ALREADY_BEEN_DECLARED,
                &[name.as_str()],
            ),
        }
    }
}
