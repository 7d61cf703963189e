//! Common types shared between the scope tracker and its drivers.

use serde::{Deserialize, Serialize};

/// How the program being parsed is evaluated.
///
/// Module code is always strict and changes how top-level function
/// declarations hoist: in a script they behave like `var`, in a module
/// they are lexical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

impl SourceType {
    #[must_use]
    pub const fn is_module(self) -> bool {
        matches!(self, SourceType::Module)
    }
}
