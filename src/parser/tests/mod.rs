//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement list parsing and `Noop` statements
//! - [`var_def`]: Variable definition parsing
//! - [`fn_def`]: Function definition parsing
//! - [`expr`]: Expression, variable, and call parsing
//! - [`errors`]: Error detection and message quality

use super::*;
use crate::ast::AstKind;
use crate::lexer::Lexer;

mod stmt;
mod var_def;

/// Helper function to parse input and return the root node.
pub(super) fn parse(input: &str) -> Result<Ast, ParseError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Helper function to parse input and return the root compound's children.
pub(super) fn statements(input: &str) -> Vec<Ast> {
    let root = parse(input)
        .unwrap_or_else(|e| panic!("Failed to parse input {:?}: {}", input, e));
    match root.kind {
        AstKind::Compound(children) => children,
        _ => panic!("Root node must be a Compound, got {}", root.kind_name()),
    }
}

/// Helper function to parse input and return the first statement.
pub(super) fn first_statement(input: &str) -> Ast {
    let mut children = statements(input);
    assert!(!children.is_empty(), "Input {:?} produced no statements", input);
    children.remove(0)
}

/// Helper function to parse input and return the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Ok(root) => panic!(
            "Expected parsing to fail for input {:?}, but it produced a {}",
            input,
            root.kind_name()
        ),
        Err(e) => e,
    }
}
