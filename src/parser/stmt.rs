//! Statement parsing.
//!
//! This module parses statement lists, single statements, and variable
//! definitions, and dispatches identifier-led statements to the right
//! production.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Ast, AstKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a `;`-separated statement list into a compound node.
    ///
    /// One statement is always parsed; each `;` then introduces another.
    /// Because an empty statement is a valid `Noop`, a trailing `;`
    /// appends a `Noop` child, and an empty input produces a compound
    /// with a single `Noop`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// program → statement (";" statement)*
    /// ```
    pub(super) fn parse_statements(&mut self) -> Result<Ast, ParseError> {
        let start_span = self.current_span();
        let mut children = Vec::new();

        children.push(self.parse_statement()?);

        while matches!(self.current_kind(), TokenKind::Semi) {
            self.advance();
            children.push(self.parse_statement()?);
        }

        let end_span = children.last().map_or(start_span, |child| child.span);
        Ok(Ast::new(
            AstKind::Compound(children),
            Span::merge(start_span, end_span),
        ))
    }

    /// Parses a single statement.
    ///
    /// Only identifier-led statements exist; anything else is an empty
    /// statement, which produces a `Noop` and leaves the token for the
    /// caller.
    pub(super) fn parse_statement(&mut self) -> Result<Ast, ParseError> {
        match self.current_kind() {
            TokenKind::Identifier(_) => self.parse_id(),
            _ => Ok(self.noop_here()),
        }
    }

    /// Dispatches an identifier-led statement on the identifier's text.
    ///
    /// `String` introduces a variable definition and `fn` a function
    /// definition; any other identifier is a variable reference or a
    /// function call.
    pub(super) fn parse_id(&mut self) -> Result<Ast, ParseError> {
        match self.current_kind() {
            TokenKind::Identifier(name) if name == "String" => self.parse_var_def(),
            TokenKind::Identifier(name) if name == "fn" => self.parse_fn_def(),
            _ => self.parse_var(),
        }
    }

    /// Parses a variable definition.
    ///
    /// The value expression is stored unevaluated; the interpreter
    /// evaluates it on each reference to the variable.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_def → "String" IDENT "=" expr
    /// ```
    pub(super) fn parse_var_def(&mut self) -> Result<Ast, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume the `String` keyword identifier

        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Equals)?;
        let value = self.parse_expr()?;

        let span = Span::merge(start_span, value.span);
        Ok(Ast::new(
            AstKind::VarDef {
                name,
                value: Box::new(value),
            },
            span,
        ))
    }
}
