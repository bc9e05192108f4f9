//! Token reading and recognition for the lexer.
//!
//! This module provides the pull interface [`Lexer::next_token`] and the
//! reading methods for identifiers, string literals, and punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Returns the next token from the input.
    ///
    /// Skips blanks (ASCII space and newline), then reads one token.
    /// At end of input this returns an [`TokenKind::Eof`] token, and
    /// keeps returning `Eof` on every subsequent call.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the current character starts no
    /// recognized token, or if a string literal is unterminated.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_blanks();

        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Ok(Token::new(TokenKind::Eof, span));
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if c.is_ascii_alphanumeric() {
            return Ok(self.read_identifier(start_pos, start_line, start_column));
        }

        if c == '"' {
            return self.read_string(start_pos, start_line, start_column);
        }

        match c {
            '=' => Ok(self.single_char_token(TokenKind::Equals, start_pos, start_line, start_column)),
            ';' => Ok(self.single_char_token(TokenKind::Semi, start_pos, start_line, start_column)),
            '(' => {
                Ok(self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column))
            }
            ')' => Ok(self.single_char_token(
                TokenKind::RightParen,
                start_pos,
                start_line,
                start_column,
            )),
            '{' => {
                Ok(self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column))
            }
            '}' => Ok(self.single_char_token(
                TokenKind::RightBrace,
                start_pos,
                start_line,
                start_column,
            )),
            ',' => Ok(self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column)),
            _ => Err(LexError::unexpected_character(
                c,
                Span::new(
                    start_pos,
                    start_pos + c.len_utf8(),
                    start_line,
                    start_column,
                ),
            )),
        }
    }

    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads an identifier from the input.
    ///
    /// Identifiers are maximal runs of ASCII alphanumeric characters.
    /// A digit may start an identifier. The value is cloned into owned
    /// storage so the token does not borrow from the input.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Identifier(value), span)
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. Every
    /// character up to the closing quote is taken verbatim; Blink has no
    /// escape sequences, so a backslash is just another character and a
    /// literal cannot contain a double quote.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the end of input is reached before the
    /// closing quote.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // skip opening "
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // skip closing "
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringLiteral(value), span));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
            }
        }
    }
}
