//! Scope and binding flags.
//!
//! `ScopeFlags` describe what kind of region a scope is; a single region
//! usually carries several of them (a function body is `FUNCTION | VAR`).
//! `BindingFlags` describe one declaration: whether it introduces a value,
//! and which hoisting discipline it follows.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags describing a lexical region.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ScopeFlags: u16 {
        /// The top-level region of a script or module.
        const PROGRAM = 1 << 0;
        /// A function body, including arrow functions and methods.
        const FUNCTION = 1 << 1;
        /// An arrow function body. Arrows have no own `this`/`super`.
        const ARROW = 1 << 2;
        /// A `catch` clause whose parameter is a bare identifier.
        const SIMPLE_CATCH = 1 << 3;
        /// `super.prop` is allowed.
        const SUPER = 1 << 4;
        /// `super()` is allowed.
        const DIRECT_SUPER = 1 << 5;
        const CLASS = 1 << 6;
        const STATIC_BLOCK = 1 << 7;
        /// The region is a hoisting target for `var` and function declarations.
        const VAR = 1 << 8;
    }
}

impl ScopeFlags {
    /// A plain block, `for` head, `switch` body, or non-simple catch.
    pub const OTHER: Self = Self::empty();
    pub const PROGRAM_BODY: Self = Self::PROGRAM.union(Self::VAR);
    pub const FUNCTION_BODY: Self = Self::FUNCTION.union(Self::VAR);
    pub const ARROW_BODY: Self = Self::FUNCTION_BODY.union(Self::ARROW);
    /// Methods get `super.prop`; constructors of derived classes add `DIRECT_SUPER`.
    pub const METHOD_BODY: Self = Self::FUNCTION_BODY.union(Self::SUPER);
    pub const CLASS_BODY: Self = Self::CLASS;
    /// Class field initializers see the class's `this` and `super.prop`.
    pub const CLASS_FIELD_INIT: Self = Self::CLASS.union(Self::SUPER);
    pub const STATIC_BLOCK_BODY: Self = Self::CLASS
        .union(Self::STATIC_BLOCK)
        .union(Self::SUPER)
        .union(Self::VAR);
}

bitflags! {
    /// Flags describing a single declaration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct BindingFlags: u16 {
        /// The declaration introduces a runtime value. Type-only bindings
        /// are never checked for redeclaration.
        const KIND_VALUE = 1 << 0;
        const KIND_TYPE = 1 << 1;
        /// `var`-style: hoists to the nearest `VAR` region.
        const SCOPE_VAR = 1 << 2;
        /// `let`/`const`/`class`-style: bound in the current region only.
        const SCOPE_LEXICAL = 1 << 3;
        /// A function declaration; var-like or lexical depending on the region.
        const SCOPE_FUNCTION = 1 << 4;
    }
}

impl BindingFlags {
    pub const VAR: Self = Self::KIND_VALUE.union(Self::SCOPE_VAR);
    pub const LEXICAL: Self = Self::KIND_VALUE.union(Self::SCOPE_LEXICAL);
    pub const CATCH_PARAM: Self = Self::LEXICAL;
    pub const FUNCTION: Self = Self::KIND_VALUE.union(Self::SCOPE_FUNCTION);
    pub const CLASS: Self = Self::KIND_VALUE
        .union(Self::KIND_TYPE)
        .union(Self::SCOPE_LEXICAL);
    /// Type aliases and interfaces.
    pub const TYPE: Self = Self::KIND_TYPE.union(Self::SCOPE_LEXICAL);

    #[must_use]
    pub const fn is_value(self) -> bool {
        self.contains(Self::KIND_VALUE)
    }

    /// The hoisting discipline of this declaration.
    ///
    /// Lexical wins over function, which wins over var, should a caller
    /// ever set more than one scope bit.
    #[must_use]
    pub const fn binding_scope(self) -> Option<BindingScope> {
        if self.contains(Self::SCOPE_LEXICAL) {
            Some(BindingScope::Lexical)
        } else if self.contains(Self::SCOPE_FUNCTION) {
            Some(BindingScope::Function)
        } else if self.contains(Self::SCOPE_VAR) {
            Some(BindingScope::Var)
        } else {
            None
        }
    }
}

/// The scoping discipline carried by a [`BindingFlags`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingScope {
    Lexical,
    Function,
    Var,
}
