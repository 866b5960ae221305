mod common;

use common::{errors, resolve, unused_names};
use vesper_resolve::{resolve_program, NativeRegistry, ResolutionError, ResolveFault, ResolverConfig};
use vesper_syntax::ast::{BinaryOp, Param, Type, TypeKind};
use vesper_syntax::AstBuilder;

#[test]
fn reassigning_immutable_binding_errors() {
    let b = AstBuilder::new();
    let program = vec![b.let_("x", b.num(1.0)), b.expr_stmt(b.assign("x", b.num(2.0)))];

    let resolution = resolve(&program);
    match &errors(&resolution)[..] {
        [ResolutionError::ReassignImmutable { name, .. }] => assert_eq!(name, "x"),
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn reassigning_mutable_binding_records_depth() {
    let b = AstBuilder::new();
    let assign = b.assign("x", b.binary(b.var("x"), BinaryOp::Add, b.num(1.0)));
    let assign_id = assign.id;
    let program = vec![
        b.let_mut("x", Some(b.num(1.0))),
        b.block(vec![b.expr_stmt(assign)]),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
    assert_eq!(resolution.depths.depth_of(assign_id), Some(1));
}

#[test]
fn assignment_alone_does_not_count_as_a_read() {
    let b = AstBuilder::new();
    let program = vec![b.block(vec![
        b.let_mut("x", Some(b.num(1.0))),
        b.expr_stmt(b.assign("x", b.num(2.0))),
    ])];

    let resolution = resolve(&program);
    assert!(errors(&resolution).is_empty());
    assert_eq!(unused_names(&resolution), vec!["x"]);
}

#[test]
fn assigning_undeclared_name_errors() {
    let b = AstBuilder::new();
    let program = vec![b.expr_stmt(b.assign("ghost", b.num(2.0)))];

    let resolution = resolve(&program);
    assert!(matches!(&errors(&resolution)[..], [ResolutionError::NotDeclared { name, .. }] if name == "ghost"));
}

#[test]
fn immutable_binding_without_initializer_errors() {
    let b = AstBuilder::new();
    let program = vec![b.let_uninit("x"), b.print(b.var("x"))];

    let resolution = resolve(&program);
    // The binding is still defined afterwards, so the read is fine.
    match &errors(&resolution)[..] {
        [ResolutionError::UninitializedImmutable { name, .. }] => assert_eq!(name, "x"),
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn uninitialized_immutable_binding_is_not_also_reported_unused() {
    let b = AstBuilder::new();
    let program = vec![b.block(vec![b.let_uninit("unread")])];

    let resolution = resolve(&program);
    assert!(matches!(
        &errors(&resolution)[..],
        [ResolutionError::UninitializedImmutable { name, .. }] if name == "unread"
    ));
    assert!(unused_names(&resolution).is_empty());
}

#[test]
fn parameter_mutability_comes_from_its_type() {
    let b = AstBuilder::new();
    let items = Param {
        name: b.ident("items"),
        ty: Type::new(TypeKind::Array(Box::new(b.ty("num"))), b.span()).mutable(),
    };
    let callback = Param {
        name: b.ident("callback"),
        ty: Type::new(TypeKind::Function(vec![b.ty("num")], Box::new(b.any_ty())), b.span()),
    };
    let program = vec![
        b.fun(
            "apply",
            vec![items, callback],
            vec![
                b.expr_stmt(b.set(b.var("items"), "first", b.num(0.0))),
                b.expr_stmt(b.set(b.var("callback"), "label", b.num(1.0))),
            ],
        ),
        b.print(b.var("apply")),
    ];

    let resolution = resolve(&program);
    match &errors(&resolution)[..] {
        [ResolutionError::MutateThroughImmutable { name, .. }] => assert_eq!(name, "callback"),
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn mutable_binding_without_initializer_is_fine() {
    let b = AstBuilder::new();
    let program = vec![b.let_mut("x", None), b.print(b.var("x"))];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
}

#[test]
fn struct_fields_need_no_initializer_and_are_never_unused() {
    let b = AstBuilder::new();
    let program = vec![
        b.struct_("Point", vec![b.field("x"), b.field_mut("y")]),
        b.print(b.struct_init("Point", vec![("x", b.num(1.0)), ("y", b.num(2.0))])),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
}

#[test]
fn mutating_field_through_immutable_binding_errors() {
    let b = AstBuilder::new();
    let program = vec![
        b.struct_("Point", vec![b.field_mut("x")]),
        b.let_("p", b.struct_init("Point", vec![("x", b.num(1.0))])),
        b.expr_stmt(b.set(b.var("p"), "x", b.num(2.0))),
    ];

    let resolution = resolve(&program);
    match &errors(&resolution)[..] {
        [ResolutionError::MutateThroughImmutable { name, .. }] => assert_eq!(name, "p"),
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn mutating_field_through_mutable_binding_is_fine() {
    let b = AstBuilder::new();
    let program = vec![
        b.struct_("Point", vec![b.field_mut("x")]),
        b.let_mut("p", Some(b.struct_init("Point", vec![("x", b.num(1.0))]))),
        b.expr_stmt(b.set(b.var("p"), "x", b.num(2.0))),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
}

#[test]
fn nested_member_chain_is_not_checked() {
    let b = AstBuilder::new();
    let program = vec![
        b.let_("p", b.num(1.0)),
        b.expr_stmt(b.set(b.get(b.var("p"), "inner"), "x", b.num(2.0))),
    ];

    let resolution = resolve(&program);
    assert!(errors(&resolution).is_empty());
}

#[test]
fn mutating_field_through_this_is_fine() {
    let b = AstBuilder::new();
    let program = vec![
        b.class(
            "Counter",
            None,
            vec![b.method("init", vec![], vec![b.expr_stmt(b.set(b.this(), "count", b.num(0.0)))])],
        ),
        b.print(b.var("Counter")),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
}

#[test]
fn member_assignment_on_call_result_is_an_internal_fault() {
    let b = AstBuilder::new();
    let program = vec![
        b.fun("make", vec![], vec![]),
        b.expr_stmt(b.set(b.call(b.var("make"), vec![]), "x", b.num(1.0))),
    ];

    let fault = resolve_program(&program, &ResolverConfig::default(), &NativeRegistry::standard())
        .expect_err("call results are not assignable");
    assert!(matches!(fault, ResolveFault::UnexpectedSetTarget { shape: "call", .. }));
}

#[test]
fn immutable_parameter_cannot_be_reassigned() {
    let b = AstBuilder::new();
    let program = vec![
        b.fun("f", vec![b.param("a")], vec![b.expr_stmt(b.assign("a", b.num(1.0)))]),
        b.print(b.var("f")),
    ];

    let resolution = resolve(&program);
    assert!(matches!(&errors(&resolution)[..], [ResolutionError::ReassignImmutable { name, .. }] if name == "a"));
}

#[test]
fn mutable_parameter_annotation_allows_reassignment() {
    let b = AstBuilder::new();
    let program = vec![
        b.fun(
            "f",
            vec![b.param_mut("a")],
            vec![b.expr_stmt(b.assign("a", b.num(1.0))), b.print(b.var("a"))],
        ),
        b.print(b.var("f")),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
}

#[test]
fn mutable_argument_marker_reads_the_binding() {
    let b = AstBuilder::new();
    let marker = b.mut_arg("xs");
    let marker_id = marker.id;
    let program = vec![
        b.let_mut("xs", Some(b.array(vec![b.num(1.0)]))),
        b.block(vec![b.expr_stmt(b.call(b.var("push"), vec![marker, b.num(2.0)]))]),
    ];

    let resolution = resolve(&program);
    assert!(resolution.diagnostics.is_empty(), "{}", resolution.diagnostics.render());
    assert_eq!(resolution.depths.depth_of(marker_id), Some(1));
}

#[test]
fn mutable_argument_marker_needs_a_visible_binding() {
    let b = AstBuilder::new();
    let program = vec![b.expr_stmt(b.call(b.var("push"), vec![b.mut_arg("xs"), b.num(2.0)]))];

    let resolution = resolve(&program);
    assert!(matches!(&errors(&resolution)[..], [ResolutionError::NotDeclared { name, .. }] if name == "xs"));
}
