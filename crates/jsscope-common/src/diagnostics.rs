//! Diagnostic types and message lookup.
//!
//! Messages use `{0}`, `{1}`, ... placeholders that are filled in by
//! [`format_message`].

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const IDENTIFIER_HAS_ALREADY_BEEN_DECLARED: u32 = 2451;
    pub const EXPORT_IS_NOT_DEFINED: u32 = 2661;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_HAS_ALREADY_BEEN_DECLARED,
        category: DiagnosticCategory::Error,
        message: "Identifier '{0}' has already been declared.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::EXPORT_IS_NOT_DEFINED,
        category: DiagnosticCategory::Error,
        message: "Export '{0}' is not defined.",
    },
];

/// A diagnostic anchored at a byte range of one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Build an error from the message table, substituting `args`.
    ///
    /// Unknown codes produce an empty message rather than failing.
    #[must_use]
    pub fn from_code(
        file: impl Into<String>,
        start: u32,
        length: u32,
        code: u32,
        args: &[&str],
    ) -> Self {
        let message = get_message_template(code)
            .map(|template| format_message(template, args))
            .unwrap_or_default();
        Self::error(file, start, length, message, code)
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
