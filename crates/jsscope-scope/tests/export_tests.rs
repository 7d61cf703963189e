//! Tests for tracking exports of names that are not (yet) declared.

use jsscope_common::Position;
use jsscope_scope::{BindingFlags, ScopeFlags, ScopeHandler, ScopeOptions};

fn module() -> ScopeHandler {
    let mut handler = ScopeHandler::with_options(ScopeOptions::module());
    handler.enter(ScopeFlags::PROGRAM_BODY);
    handler
}

fn pending(handler: &ScopeHandler) -> Vec<(String, Position)> {
    handler
        .undefined_exports()
        .map(|(name, at)| (name.to_string(), at))
        .collect()
}

#[test]
fn test_export_without_binding_stays_pending() {
    let mut handler = module();
    let export_at = Position::new(1, 9, 9);
    handler.register_potential_export("x", export_at);

    assert!(handler.has_undefined_exports());
    assert_eq!(pending(&handler), vec![("x".to_string(), export_at)]);
}

#[test]
fn test_export_of_declared_name_is_not_pending() {
    let mut handler = module();
    handler
        .declare_name("x", BindingFlags::LEXICAL, Position::new(1, 4, 4))
        .expect("let x");
    handler.register_potential_export("x", Position::new(2, 9, 20));
    assert!(!handler.has_undefined_exports());
}

#[test]
fn test_later_top_level_bindings_resolve_export() {
    for binding in [
        BindingFlags::LEXICAL,
        BindingFlags::VAR,
        BindingFlags::FUNCTION,
        BindingFlags::CLASS,
        BindingFlags::TYPE,
    ] {
        let mut handler = module();
        handler.register_potential_export("x", Position::new(1, 9, 9));
        handler
            .declare_name("x", binding, Position::new(2, 4, 20))
            .expect("first declaration of x");
        assert!(
            !handler.has_undefined_exports(),
            "{binding:?} at the top level should satisfy the export"
        );
    }
}

#[test]
fn test_var_in_nested_block_resolves_export() {
    // export { x }; { { var x; } }
    let mut handler = module();
    handler.register_potential_export("x", Position::new(1, 9, 9));
    handler.enter(ScopeFlags::OTHER);
    handler.enter(ScopeFlags::OTHER);
    handler
        .declare_name("x", BindingFlags::VAR, Position::new(2, 8, 24))
        .expect("var x");
    assert!(!handler.has_undefined_exports());
}

#[test]
fn test_nested_declarations_do_not_resolve_export() {
    // export { x }; { let x; } function f() { var x; }
    let mut handler = module();
    handler.register_potential_export("x", Position::new(1, 9, 9));

    handler.enter(ScopeFlags::OTHER);
    handler
        .declare_name("x", BindingFlags::LEXICAL, Position::new(2, 6, 20))
        .expect("let x in block");
    handler.exit();

    handler.enter(ScopeFlags::FUNCTION_BODY);
    handler
        .declare_name("x", BindingFlags::VAR, Position::new(3, 21, 40))
        .expect("var x in function");
    handler.exit();

    assert_eq!(pending(&handler).len(), 1);
}

#[test]
fn test_scripts_never_resolve_pending_exports() {
    let mut handler = ScopeHandler::with_options(ScopeOptions::script());
    handler.enter(ScopeFlags::PROGRAM_BODY);
    handler.register_potential_export("x", Position::new(1, 9, 9));
    handler
        .declare_name("x", BindingFlags::LEXICAL, Position::new(2, 4, 20))
        .expect("let x");
    assert!(handler.has_undefined_exports());
}

#[test]
fn test_pending_exports_keep_registration_order() {
    let mut handler = module();
    handler.register_potential_export("b", Position::new(1, 9, 9));
    handler.register_potential_export("a", Position::new(1, 12, 12));
    handler.register_potential_export("c", Position::new(1, 15, 15));
    handler
        .declare_name("a", BindingFlags::VAR, Position::new(2, 4, 30))
        .expect("var a");

    let names: Vec<String> = pending(&handler).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn test_take_undefined_exports_drains() {
    let mut handler = module();
    handler.register_potential_export("x", Position::new(1, 9, 9));
    let taken = handler.take_undefined_exports();
    assert_eq!(taken.get("x"), Some(&Position::new(1, 9, 9)));
    assert!(!handler.has_undefined_exports());
}

#[test]
fn test_undefined_export_diagnostics() {
    let mut handler = module();
    handler.register_potential_export("missing", Position::new(1, 9, 9));
    let diags = handler.undefined_export_diagnostics("mod.js");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, 2661);
    assert_eq!(diags[0].start, 9);
    assert_eq!(diags[0].length, 7);
    assert_eq!(diags[0].message_text, "Export 'missing' is not defined.");
}
