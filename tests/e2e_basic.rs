//! Basic end-to-end tests for the Blink interpreter.
//!
//! These tests verify fundamental functionality: printing string
//! literals, statement sequencing, and empty programs.

mod common;

use common::run_ok;

#[test]
fn test_print_literal() {
    let output = run_ok(r#"print("hello");"#);
    assert_eq!(output, "hello\n");
}

#[test]
fn test_print_sequence() {
    let output = run_ok(r#"print("a");print("b");print("c");"#);
    assert_eq!(output, "a\nb\nc\n");
}

#[test]
fn test_print_multiple_arguments() {
    let output = run_ok(r#"print("one", "two");"#);
    assert_eq!(output, "one\ntwo\n");
}

#[test]
fn test_print_literal_with_spaces_and_punctuation() {
    let output = run_ok(r#"print("Hello, World!");"#);
    assert_eq!(output, "Hello, World!\n");
}

#[test]
fn test_empty_program() {
    let output = run_ok("");
    assert_eq!(output, "");
}

#[test]
fn test_blank_only_program() {
    let output = run_ok("  \n \n ");
    assert_eq!(output, "");
}

#[test]
fn test_semicolons_only() {
    let output = run_ok(";;;");
    assert_eq!(output, "");
}

#[test]
fn test_no_trailing_semicolon() {
    let output = run_ok(r#"print("end")"#);
    assert_eq!(output, "end\n");
}

#[test]
fn test_statements_across_lines() {
    let output = run_ok("print(\"first\");\nprint(\"second\");\n");
    assert_eq!(output, "first\nsecond\n");
}

#[test]
fn test_print_without_argument_prints_placeholder() {
    // `print()` carries one empty expression, which is not a string.
    let output = run_ok("print();");
    assert_eq!(output, "<noop>\n");
}
