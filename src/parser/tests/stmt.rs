//! Statement list parsing tests.

use super::*;

#[test]
fn test_root_is_always_compound() {
    let root = parse("print(\"x\")").unwrap();
    assert!(matches!(root.kind, AstKind::Compound(_)));
}

#[test]
fn test_empty_program_is_compound_with_noop() {
    let children = statements("");
    assert_eq!(children.len(), 1);
    assert!(matches!(children[0].kind, AstKind::Noop));
}

#[test]
fn test_single_statement() {
    let children = statements("print(\"a\")");
    assert_eq!(children.len(), 1);
    assert!(matches!(children[0].kind, AstKind::FnCall { .. }));
}

#[test]
fn test_statements_separated_by_semi() {
    let children = statements("print(\"a\");print(\"b\");print(\"c\")");
    assert_eq!(children.len(), 3);
    for child in &children {
        assert!(matches!(child.kind, AstKind::FnCall { .. }));
    }
}

#[test]
fn test_trailing_semi_appends_noop() {
    let children = statements("print(\"a\");");
    assert_eq!(children.len(), 2);
    assert!(matches!(children[0].kind, AstKind::FnCall { .. }));
    assert!(matches!(children[1].kind, AstKind::Noop));
}

#[test]
fn test_consecutive_semis_produce_noops() {
    let children = statements(";;");
    assert_eq!(children.len(), 3);
    for child in &children {
        assert!(matches!(child.kind, AstKind::Noop));
    }
}

#[test]
fn test_mixed_statement_kinds() {
    let children = statements(r#"String x = "v";fn f(a) { print(a); };f(x)"#);
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0].kind, AstKind::VarDef { .. }));
    assert!(matches!(children[1].kind, AstKind::FnDef { .. }));
    assert!(matches!(children[2].kind, AstKind::FnCall { .. }));
}

#[test]
fn test_statements_across_newlines() {
    let children = statements("print(\"a\");\nprint(\"b\")");
    assert_eq!(children.len(), 2);
}

#[test]
fn test_tokens_after_last_statement_are_left_unconsumed() {
    // Without a `;` there is no next statement; parsing stops and the
    // remaining tokens are never inspected.
    let children = statements("print(\"a\") print(\"b\")");
    assert_eq!(children.len(), 1);
}
