//! Lexical analyzer for the Blink language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer is a pull-based stream: each call to
//! [`next_token`](Lexer::next_token) skips blanks and returns the next
//! token. Once the input is exhausted it returns an
//! [`Eof`](TokenKind::Eof) token and keeps doing so on every further
//! call. [`tokenize`](Lexer::tokenize) drains the stream into a vector
//! for callers that want the whole program up front.
//!
//! # Supported Tokens
//!
//! - **Identifiers**: maximal runs of ASCII alphanumerics (a-z, A-Z, 0-9).
//!   A digit may start an identifier. There are no keyword tokens; the
//!   parser recognizes `String` and `fn` by their text.
//! - **String literals**: enclosed in double quotes, taken verbatim.
//!   Blink has no escape sequences.
//! - **Punctuation**: `=`, `;`, `(`, `)`, `{`, `}`, `,`
//!
//! Only ASCII space and newline are blanks. Tabs, carriage returns, and
//! any other unrecognized character produce an error rather than being
//! skipped.
//!
//! # Examples
//!
//! ```
//! use blink::lexer::Lexer;
//! use blink::token::TokenKind;
//!
//! let mut lexer = Lexer::new("print(\"hello\")");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Identifier(_)));
//! assert!(matches!(tokens[1].kind, TokenKind::LeftParen));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Blank skipping
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes Blink source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used
/// once per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use. Token
/// values are cloned into owned storage, so tokens outlive the lexer.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and
    /// column numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method drains [`next_token`](Self::next_token) from start to
    /// end. The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An unexpected character is encountered (anything that is not a
    ///   blank, an ASCII alphanumeric, a double quote, or recognized
    ///   punctuation)
    /// - A string literal is not terminated before the end of input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let at_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if at_eof {
                break;
            }
        }

        Ok(tokens)
    }
}
