//! Tests for running the handler over a dialect-specific scope record.

use jsscope_common::Position;
use jsscope_scope::{
    BindingFlags, NameSet, ScopeBindings, ScopeFlags, ScopeHandler, ScopeOptions, ScopeRecord,
};

/// A scope that also remembers type-only names, as a typed dialect would.
#[derive(Debug, Default)]
struct TypedScope {
    flags: ScopeFlags,
    bindings: ScopeBindings,
    types: NameSet,
}

impl ScopeRecord for TypedScope {
    fn with_flags(flags: ScopeFlags) -> Self {
        TypedScope {
            flags,
            ..TypedScope::default()
        }
    }

    fn flags(&self) -> ScopeFlags {
        self.flags
    }

    fn bindings(&self) -> &ScopeBindings {
        &self.bindings
    }

    fn bindings_mut(&mut self) -> &mut ScopeBindings {
        &mut self.bindings
    }
}

fn at(index: u32) -> Position {
    Position::new(1, index, index)
}

#[test]
fn test_custom_record_follows_same_rules() {
    let mut handler: ScopeHandler<TypedScope> = ScopeHandler::from_options(ScopeOptions::module());
    handler.enter(ScopeFlags::PROGRAM_BODY);
    handler
        .declare_name("x", BindingFlags::LEXICAL, at(0))
        .expect("let x");
    assert!(
        handler
            .declare_name("x", BindingFlags::VAR, at(10))
            .is_err()
    );

    handler.enter(ScopeFlags::SIMPLE_CATCH);
    handler
        .declare_name("e", BindingFlags::CATCH_PARAM, at(20))
        .expect("catch param");
    handler
        .declare_name("e", BindingFlags::VAR, at(30))
        .expect("Annex B var e");
    assert_eq!(handler.exit(), ScopeFlags::SIMPLE_CATCH);
}

#[test]
fn test_extra_record_data_is_left_alone() {
    let mut handler: ScopeHandler<TypedScope> = ScopeHandler::from_options(ScopeOptions::module());
    handler.enter(ScopeFlags::PROGRAM_BODY);
    handler
        .declare_name("T", BindingFlags::TYPE, at(0))
        .expect("type T");
    assert!(handler.current_scope().types.is_empty());
    assert!(!handler.current_scope().bindings().contains("T"));
}

#[test]
fn test_custom_record_predicates() {
    let mut handler: ScopeHandler<TypedScope> = ScopeHandler::from_options(ScopeOptions::script());
    handler.enter(ScopeFlags::PROGRAM_BODY);
    handler.enter(ScopeFlags::CLASS_BODY);
    handler.enter(ScopeFlags::STATIC_BLOCK_BODY);
    assert!(handler.in_static_block());
    assert!(handler.allow_super());
    assert!(handler.treat_functions_as_var());
    assert_eq!(handler.depth(), 3);
}
