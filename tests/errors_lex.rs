//! Lexical error tests for the Blink interpreter.
//!
//! These tests verify that invalid characters and malformed literals
//! are reported on stderr with exit code 1.

mod common;

use common::run_err;

#[test]
fn test_unexpected_character() {
    let (code, stderr) = run_err(r#"print("a") + print("b");"#);
    assert_eq!(code, Some(1));
    assert!(
        stderr.contains("Unexpected character"),
        "Expected unexpected character diagnostic, got:\n{}",
        stderr
    );
}

#[test]
fn test_tab_is_not_whitespace() {
    let (code, stderr) = run_err("print(\"a\");\tprint(\"b\");");
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Unexpected character"));
}

#[test]
fn test_underscore_rejected() {
    let (code, stderr) = run_err(r#"String my_var = "x";"#);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Unexpected character"));
}

#[test]
fn test_unterminated_string() {
    let (code, stderr) = run_err(r#"print("never closed"#);
    assert_eq!(code, Some(1));
    assert!(
        stderr.contains("Unterminated string"),
        "Expected unterminated string diagnostic, got:\n{}",
        stderr
    );
}
