//! Scope handler: the scope stack and the redeclaration rules.
//!
//! The parser calls [`ScopeHandler::enter`] and [`ScopeHandler::exit`] as it
//! opens and closes lexical regions, and [`ScopeHandler::declare_name`] at
//! every binding site. Declarations are checked against the rules for
//! `var`, lexical and function bindings (including the Annex B allowance
//! for `catch (e) { var e; }`) as they are seen, so the stack only ever
//! holds the regions that enclose the current token.

use crate::error::ScopeError;
use crate::flags::{BindingFlags, BindingScope, ScopeFlags};
use crate::options::ScopeOptions;
use crate::scope::{FxIndexMap, Scope, ScopeRecord};
use jsscope_common::{Diagnostic, Position, diagnostic_codes};
use tracing::{debug, trace};

/// Tracks open scopes and the names declared in them for one parse.
#[derive(Debug)]
pub struct ScopeHandler<S = Scope> {
    options: ScopeOptions,
    scope_stack: Vec<S>,
    /// Exported names not (yet) bound at the top level, with the position
    /// of the `export` that mentioned them.
    undefined_exports: FxIndexMap<String, Position>,
}

impl ScopeHandler {
    pub fn new() -> Self {
        Self::with_options(ScopeOptions::default())
    }

    pub fn with_options(options: ScopeOptions) -> Self {
        Self::from_options(options)
    }
}

impl Default for ScopeHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScopeRecord> ScopeHandler<S> {
    /// Create a handler whose stack holds records of type `S`.
    pub fn from_options(options: ScopeOptions) -> Self {
        ScopeHandler {
            options,
            scope_stack: Vec::new(),
            undefined_exports: FxIndexMap::default(),
        }
    }

    #[inline]
    pub fn options(&self) -> ScopeOptions {
        self.options
    }

    #[inline]
    pub fn in_module(&self) -> bool {
        self.options.source_type.is_module()
    }

    // Scope stack

    pub fn enter(&mut self, flags: ScopeFlags) {
        trace!(depth = self.scope_stack.len(), ?flags, "enter scope");
        self.scope_stack.push(S::with_flags(flags));
    }

    /// Close the current region and return its flags.
    ///
    /// # Panics
    ///
    /// Panics if no region is open; enter/exit calls must be paired.
    #[track_caller]
    pub fn exit(&mut self) -> ScopeFlags {
        let Some(scope) = self.scope_stack.pop() else {
            panic!("ScopeHandler::exit called with no open scope");
        };
        let flags = scope.flags();
        trace!(depth = self.scope_stack.len(), ?flags, "exit scope");
        flags
    }

    /// Number of open regions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scope_stack.is_empty()
    }

    /// Open regions, outermost first.
    #[inline]
    pub fn scopes(&self) -> &[S] {
        &self.scope_stack
    }

    /// # Panics
    ///
    /// Panics if no region is open.
    #[track_caller]
    pub fn current_scope(&self) -> &S {
        &self.scope_stack[self.current_index()]
    }

    #[track_caller]
    fn current_index(&self) -> usize {
        match self.scope_stack.len().checked_sub(1) {
            Some(idx) => idx,
            None => panic!("ScopeHandler used with no open scope"),
        }
    }

    #[track_caller]
    fn program_scope(&self) -> &S {
        match self.scope_stack.first() {
            Some(scope) => scope,
            None => panic!("ScopeHandler used before the program scope was entered"),
        }
    }

    /// Flags of the nearest region that `var` declarations hoist to.
    pub fn current_var_scope_flags(&self) -> ScopeFlags {
        self.scope_stack
            .iter()
            .rev()
            .map(S::flags)
            .find(|flags| flags.contains(ScopeFlags::VAR))
            .unwrap_or_default()
    }

    /// Flags of the nearest region with its own `this`, `super` and
    /// `new.target`. Arrow functions are skipped.
    pub fn current_this_scope_flags(&self) -> ScopeFlags {
        self.scope_stack
            .iter()
            .rev()
            .map(S::flags)
            .find(|flags| {
                flags.intersects(ScopeFlags::VAR | ScopeFlags::CLASS)
                    && !flags.contains(ScopeFlags::ARROW)
            })
            .unwrap_or_default()
    }

    pub fn in_top_level(&self) -> bool {
        self.current_scope().flags().contains(ScopeFlags::PROGRAM)
    }

    pub fn in_function(&self) -> bool {
        self.current_var_scope_flags()
            .contains(ScopeFlags::FUNCTION)
    }

    pub fn allow_super(&self) -> bool {
        self.current_this_scope_flags().contains(ScopeFlags::SUPER)
    }

    pub fn allow_direct_super(&self) -> bool {
        self.current_this_scope_flags()
            .contains(ScopeFlags::DIRECT_SUPER)
    }

    pub fn in_class(&self) -> bool {
        self.current_this_scope_flags().contains(ScopeFlags::CLASS)
    }

    pub fn in_class_and_not_in_non_arrow_function(&self) -> bool {
        let flags = self.current_this_scope_flags();
        flags.contains(ScopeFlags::CLASS) && !flags.contains(ScopeFlags::FUNCTION)
    }

    pub fn in_static_block(&self) -> bool {
        for scope in self.scope_stack.iter().rev() {
            let flags = scope.flags();
            if flags.contains(ScopeFlags::STATIC_BLOCK) {
                return true;
            }
            // function body, module body, class field initializer
            if flags.intersects(ScopeFlags::VAR | ScopeFlags::CLASS) {
                return false;
            }
        }
        false
    }

    pub fn in_non_arrow_function(&self) -> bool {
        self.current_this_scope_flags()
            .contains(ScopeFlags::FUNCTION)
    }

    pub fn treat_functions_as_var(&self) -> bool {
        self.treat_functions_as_var_in_scope(self.current_scope())
    }

    /// At the top level of a function, static block or script, function
    /// declarations behave like `var` declarations rather than lexical ones.
    pub fn treat_functions_as_var_in_scope(&self, scope: &S) -> bool {
        let flags = scope.flags();
        flags.intersects(ScopeFlags::FUNCTION | ScopeFlags::STATIC_BLOCK)
            || (!self.in_module() && flags.contains(ScopeFlags::PROGRAM))
    }

    // Declarations

    /// The binding a function declaration in the current scope should use.
    ///
    /// Plain sloppy-mode functions keep the function discipline so the
    /// Annex B duplicate allowances apply. Strict-mode (and module),
    /// generator and async functions are `var` where functions hoist and
    /// lexical everywhere else.
    pub fn function_declaration_binding(
        &self,
        strict: bool,
        is_generator_or_async: bool,
    ) -> BindingFlags {
        if strict || self.in_module() || is_generator_or_async {
            if self.treat_functions_as_var() {
                BindingFlags::VAR
            } else {
                BindingFlags::LEXICAL
            }
        } else {
            BindingFlags::FUNCTION
        }
    }

    /// Record a declaration of `name`, or reject it as a redeclaration.
    ///
    /// Lexical and function bindings land in the current region. `var`
    /// bindings are recorded in every region from the current one up to and
    /// including the nearest `VAR` region, so that blocks in between see
    /// them when later lexical declarations are checked.
    #[tracing::instrument(level = "trace", skip(self, at), fields(depth = self.scope_stack.len()))]
    pub fn declare_name(
        &mut self,
        name: &str,
        binding: BindingFlags,
        at: Position,
    ) -> Result<(), ScopeError> {
        let mut idx = self.current_index();

        if binding.is_value() {
            match binding.binding_scope() {
                Some(kind @ (BindingScope::Lexical | BindingScope::Function)) => {
                    self.check_redeclaration_in_scope(&self.scope_stack[idx], name, binding, at)?;

                    let bindings = self.scope_stack[idx].bindings_mut();
                    if kind == BindingScope::Function {
                        bindings.functions.insert(name.to_string());
                    } else {
                        bindings.lexical.insert(name.to_string());
                    }

                    if kind == BindingScope::Lexical {
                        self.maybe_export_defined(idx, name);
                    }
                }
                Some(BindingScope::Var) => loop {
                    self.check_redeclaration_in_scope(&self.scope_stack[idx], name, binding, at)?;
                    self.scope_stack[idx]
                        .bindings_mut()
                        .var
                        .insert(name.to_string());
                    self.maybe_export_defined(idx, name);

                    if idx == 0 || self.scope_stack[idx].flags().contains(ScopeFlags::VAR) {
                        break;
                    }
                    idx -= 1;
                },
                None => {}
            }
        }

        self.maybe_export_defined(idx, name);
        Ok(())
    }

    /// Drop `name` from the pending exports if the scope at `idx` is the
    /// top level of a module.
    fn maybe_export_defined(&mut self, idx: usize, name: &str) {
        if self.in_module()
            && self.scope_stack[idx].flags().contains(ScopeFlags::PROGRAM)
            && self.undefined_exports.shift_remove(name).is_some()
        {
            trace!(name, "export now bound locally");
        }
    }

    pub fn check_redeclaration_in_scope(
        &self,
        scope: &S,
        name: &str,
        binding: BindingFlags,
        at: Position,
    ) -> Result<(), ScopeError> {
        if self.is_redeclared_in_scope(scope, name, binding) {
            debug!(name, %at, ?binding, scope_flags = ?scope.flags(), "redeclaration");
            return Err(ScopeError::VarRedeclaration {
                name: name.to_string(),
                at,
            });
        }
        Ok(())
    }

    /// Whether declaring `name` with `binding` in `scope` conflicts with what
    /// is already there. The checks run in a fixed order.
    pub fn is_redeclared_in_scope(&self, scope: &S, name: &str, binding: BindingFlags) -> bool {
        if !binding.is_value() {
            return false;
        }

        let names = scope.bindings();
        match binding.binding_scope() {
            Some(BindingScope::Lexical) => {
                names.lexical.contains(name)
                    || names.functions.contains(name)
                    || names.var.contains(name)
            }
            Some(BindingScope::Function) => {
                names.lexical.contains(name)
                    || (!self.treat_functions_as_var_in_scope(scope) && names.var.contains(name))
            }
            Some(BindingScope::Var) => {
                // Annex B.3.4: `catch (e) { var e; }` is allowed for simple catch parameters.
                let is_catch_param = scope.flags().contains(ScopeFlags::SIMPLE_CATCH)
                    && names.catch_binding() == Some(name);
                (names.lexical.contains(name) && !is_catch_param)
                    || (!self.treat_functions_as_var_in_scope(scope)
                        && names.functions.contains(name))
            }
            None => false,
        }
    }

    // Exports

    /// Note a bare-identifier local export (`export { name }`).
    ///
    /// If `name` is not yet bound at the top level it stays pending until a
    /// later top-level declaration binds it.
    pub fn register_potential_export(&mut self, name: &str, at: Position) {
        if self.program_scope().bindings().contains(name) {
            return;
        }
        debug!(name, %at, "export of not-yet-declared name");
        self.undefined_exports.insert(name.to_string(), at);
    }

    /// Pending exports in the order they were first seen.
    pub fn undefined_exports(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.undefined_exports
            .iter()
            .map(|(name, &at)| (name.as_str(), at))
    }

    pub fn has_undefined_exports(&self) -> bool {
        !self.undefined_exports.is_empty()
    }

    /// Take the pending exports, typically once parsing has finished.
    pub fn take_undefined_exports(&mut self) -> FxIndexMap<String, Position> {
        std::mem::take(&mut self.undefined_exports)
    }

    pub fn undefined_export_diagnostics(&self, file: &str) -> Vec<Diagnostic> {
        self.undefined_exports()
            .map(|(name, at)| {
                Diagnostic::from_code(
                    file,
                    at.index,
                    name.len() as u32,
                    diagnostic_codes::EXPORT_IS_NOT_DEFINED,
                    &[name],
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/handler_tests.rs"]
mod tests;
