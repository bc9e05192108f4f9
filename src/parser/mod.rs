//! Parser for the Blink language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into an [`Ast`].
//!
//! # Overview
//!
//! The parser implements a recursive descent parsing strategy. It
//! consumes tokens produced by the [`crate::lexer`] and builds an AST
//! for the [`crate::interpreter`] to walk.
//!
//! # Grammar
//!
//! ```text
//! program        → statement (";" statement)*
//! statement      → id_statement | ε
//! id_statement   → var_def | fn_def | var_or_call
//! var_def        → "String" IDENT "=" expr
//! fn_def         → "fn" IDENT "(" params ")" "{" program "}"
//! params         → var ("," var)*
//! var_or_call    → IDENT ("(" args ")")?
//! args           → expr ("," expr)*
//! expr           → STRING | var_or_call | ε
//! ```
//!
//! `String` and `fn` are ordinary identifier tokens recognized by their
//! text. An empty statement or expression produces a `Noop` node, so a
//! trailing `;` appends a `Noop` child to the enclosing compound.
//! The grammar has no operators, so there is no precedence machinery.
//!
//! # Examples
//!
//! ```
//! use blink::ast::AstKind;
//! use blink::lexer::Lexer;
//! use blink::parser::Parser;
//!
//! let mut lexer = Lexer::new("print(\"hello\")");
//! let tokens = lexer.tokenize().unwrap();
//!
//! let mut parser = Parser::new(tokens);
//! let root = parser.parse().unwrap();
//!
//! assert!(matches!(root.kind, AstKind::Compound(ref stmts) if stmts.len() == 1));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `stmt` - Statement and variable definition parsing
//! - `fn_def` - Function definition parsing
//! - `expr` - Expression, variable, and call parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::interpreter`] - Walks the AST

mod error;
mod expr;
mod fn_def;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::Ast;
use crate::token::Token;

/// A recursive descent parser for the Blink language.
///
/// The parser maintains a position within the token stream and provides
/// methods to parse various grammar productions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce an AST.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The lexer always produces at
    /// least an Eof token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the token stream into an AST.
    ///
    /// This is the main entry point for parsing. The returned root node
    /// is always a [`Compound`](crate::ast::AstKind::Compound), even
    /// when the program is empty or a single statement.
    ///
    /// Parsing stops at the first token that neither continues a
    /// statement nor is a `;`; an Eof there is the normal end of a
    /// program.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails to parse. Common causes:
    /// - A missing `=` or variable name in a definition
    /// - Malformed parameter or argument lists
    /// - A missing `}` after a function body
    pub fn parse(&mut self) -> Result<Ast, ParseError> {
        self.parse_statements()
    }
}
