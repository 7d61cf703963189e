//! Configuration for the scope handler.

use jsscope_common::SourceType;
use serde::{Deserialize, Serialize};

/// Configuration options for the scope handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeOptions {
    /// Whether the program is a script or a module. This affects how
    /// top-level function declarations hoist and whether exports are tracked.
    pub source_type: SourceType,
}

impl ScopeOptions {
    #[must_use]
    pub const fn script() -> Self {
        ScopeOptions {
            source_type: SourceType::Script,
        }
    }

    #[must_use]
    pub const fn module() -> Self {
        ScopeOptions {
            source_type: SourceType::Module,
        }
    }
}
