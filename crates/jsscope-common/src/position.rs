//! Source positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in source text.
///
/// `line` is 1-based, `column` and `index` are 0-based. `index` is the
/// offset from the start of the file and is what diagnostics anchor on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub index: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32, index: u32) -> Self {
        Self {
            line,
            column,
            index,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
