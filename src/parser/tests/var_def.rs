//! Variable definition parsing tests.

use super::*;

#[test]
fn test_var_def_string_literal() {
    let stmt = first_statement(r#"String greeting = "hello""#);
    match &stmt.kind {
        AstKind::VarDef { name, value } => {
            assert_eq!(name, "greeting");
            assert!(matches!(value.kind, AstKind::StringLiteral(ref s) if s == "hello"));
        }
        _ => panic!("Expected VarDef, got {}", stmt.kind_name()),
    }
}

#[test]
fn test_var_def_from_variable() {
    let stmt = first_statement("String y = x");
    match &stmt.kind {
        AstKind::VarDef { name, value } => {
            assert_eq!(name, "y");
            assert!(matches!(value.kind, AstKind::Variable { ref name } if name == "x"));
        }
        _ => panic!("Expected VarDef, got {}", stmt.kind_name()),
    }
}

#[test]
fn test_var_def_from_call() {
    let stmt = first_statement(r#"String y = f("a")"#);
    match &stmt.kind {
        AstKind::VarDef { value, .. } => {
            assert!(matches!(value.kind, AstKind::FnCall { .. }));
        }
        _ => panic!("Expected VarDef, got {}", stmt.kind_name()),
    }
}

#[test]
fn test_var_def_empty_value_is_noop() {
    // `String x = ;` has nothing in expression position.
    let children = statements("String x = ;");
    match &children[0].kind {
        AstKind::VarDef { value, .. } => {
            assert!(matches!(value.kind, AstKind::Noop));
        }
        _ => panic!("Expected VarDef"),
    }
}

#[test]
fn test_var_def_numeric_name() {
    // Identifiers may start with digits.
    let stmt = first_statement(r#"String 1st = "v""#);
    match &stmt.kind {
        AstKind::VarDef { name, .. } => assert_eq!(name, "1st"),
        _ => panic!("Expected VarDef"),
    }
}

#[test]
fn test_var_def_value_string_is_owned_copy() {
    let stmt = first_statement(r#"String x = "payload""#);
    match &stmt.kind {
        AstKind::VarDef { value, .. } => match &value.kind {
            AstKind::StringLiteral(s) => assert_eq!(s, "payload"),
            _ => panic!("Expected StringLiteral value"),
        },
        _ => panic!("Expected VarDef"),
    }
}
