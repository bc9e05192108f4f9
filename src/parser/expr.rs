//! Expression, variable, and call parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Ast, AstKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// An expression is a string literal, an identifier-led form
    /// (variable reference, call, or even a nested definition), or
    /// nothing at all, which produces a `Noop` and leaves the token
    /// for the caller.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr → STRING | var_or_call | ε
    /// ```
    pub(super) fn parse_expr(&mut self) -> Result<Ast, ParseError> {
        match self.current_kind() {
            TokenKind::StringLiteral(_) => self.parse_string(),
            TokenKind::Identifier(_) => self.parse_id(),
            _ => Ok(self.noop_here()),
        }
    }

    /// Parses a variable reference, promoting it to a function call
    /// when a `(` follows the name.
    ///
    /// The captured name is handed to [`parse_call`](Parser::parse_call)
    /// explicitly, so no look-behind state is needed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_or_call → IDENT ("(" args ")")?
    /// ```
    pub(super) fn parse_var(&mut self) -> Result<Ast, ParseError> {
        let start_span = self.current_span();
        let name = self.expect_identifier()?;

        if matches!(self.current_kind(), TokenKind::LeftParen) {
            return self.parse_call(name, start_span);
        }

        Ok(Ast::new(AstKind::Variable { name }, start_span))
    }

    /// Parses a function call's argument list.
    ///
    /// The callee name has already been consumed. One argument is
    /// always parsed, so `f()` yields a single `Noop` argument rather
    /// than an empty list; each `,` then introduces another argument.
    ///
    /// # Grammar
    ///
    /// ```text
    /// call → IDENT "(" expr ("," expr)* ")"
    /// ```
    pub(super) fn parse_call(&mut self, name: String, start_span: Span) -> Result<Ast, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();
        args.push(self.parse_expr()?);

        while matches!(self.current_kind(), TokenKind::Comma) {
            self.advance();
            args.push(self.parse_expr()?);
        }

        let close_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        Ok(Ast::new(
            AstKind::FnCall { name, args },
            Span::merge(start_span, close_span),
        ))
    }

    /// Parses a string literal expression.
    ///
    /// The token's value is cloned into the node, decoupling AST
    /// lifetime from the token stream.
    pub(super) fn parse_string(&mut self) -> Result<Ast, ParseError> {
        let span = self.current_span();

        if let TokenKind::StringLiteral(value) = self.current_kind() {
            let value = value.clone();
            self.advance();
            Ok(Ast::new(AstKind::StringLiteral(value), span))
        } else {
            Err(ParseError::unexpected_token(
                "string literal",
                &Self::token_kind_display(self.current_kind()),
                span,
            ))
        }
    }
}
