//! Function definition parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Ast, AstKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a function definition.
    ///
    /// The parameter list requires at least one parameter; `fn f() {}`
    /// is a syntax error. Parameters are parsed with
    /// [`parse_var`](Parser::parse_var), so each is normally a
    /// `Variable` node. The body is a statement list sharing the
    /// program's grammar.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_def → "fn" IDENT "(" var ("," var)* ")" "{" program "}"
    /// ```
    pub(super) fn parse_fn_def(&mut self) -> Result<Ast, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume the `fn` keyword identifier

        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        params.push(self.parse_var()?);

        while matches!(self.current_kind(), TokenKind::Comma) {
            self.advance();
            params.push(self.parse_var()?);
        }

        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;

        let body = self.parse_statements()?;

        let close_span = self.current_span();
        self.expect(&TokenKind::RightBrace)?;

        Ok(Ast::new(
            AstKind::FnDef {
                name,
                params,
                body: Box::new(body),
            },
            Span::merge(start_span, close_span),
        ))
    }
}
