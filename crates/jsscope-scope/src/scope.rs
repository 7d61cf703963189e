//! Scope records: one per open lexical region.

use crate::flags::ScopeFlags;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// Insertion-ordered set of identifier names.
pub type NameSet = IndexSet<String, FxBuildHasher>;
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The names declared directly in one region, split by discipline.
#[derive(Clone, Debug, Default)]
pub struct ScopeBindings {
    /// `var` declarations, including those that passed through this region
    /// on their way to the enclosing var scope.
    pub var: NameSet,
    /// `let`, `const`, `class`, catch parameters and block-level functions
    /// that were not hoisted.
    pub lexical: NameSet,
    /// Function declarations made directly in this region.
    pub functions: NameSet,
}

impl ScopeBindings {
    /// True if `name` is declared here under any discipline.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lexical.contains(name) || self.var.contains(name) || self.functions.contains(name)
    }

    /// The binding introduced by a simple catch clause: the first lexical name.
    #[must_use]
    pub fn catch_binding(&self) -> Option<&str> {
        self.lexical.first().map(String::as_str)
    }
}

/// Anything the scope handler can keep on its stack.
///
/// Dialects that need extra per-region data (type names, enum names, ...)
/// implement this for their own record; the handler only ever reads the
/// flags and the three name sets.
pub trait ScopeRecord {
    /// Create an empty record for a region with `flags`.
    fn with_flags(flags: ScopeFlags) -> Self
    where
        Self: Sized;

    fn flags(&self) -> ScopeFlags;

    fn bindings(&self) -> &ScopeBindings;

    fn bindings_mut(&mut self) -> &mut ScopeBindings;
}

/// The default scope record.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    pub flags: ScopeFlags,
    pub bindings: ScopeBindings,
}

impl Scope {
    #[must_use]
    pub fn new(flags: ScopeFlags) -> Self {
        Scope {
            flags,
            bindings: ScopeBindings::default(),
        }
    }
}

impl ScopeRecord for Scope {
    fn with_flags(flags: ScopeFlags) -> Self {
        Scope::new(flags)
    }

    #[inline]
    fn flags(&self) -> ScopeFlags {
        self.flags
    }

    #[inline]
    fn bindings(&self) -> &ScopeBindings {
        &self.bindings
    }

    #[inline]
    fn bindings_mut(&mut self) -> &mut ScopeBindings {
        &mut self.bindings
    }
}
