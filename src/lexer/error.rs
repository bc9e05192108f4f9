//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can
//! occur during tokenization.

use crate::token::Span;

/// The kind of lexical analysis error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no recognized token was encountered.
    ///
    /// This includes tabs and carriage returns (which are not blanks in
    /// Blink), non-ASCII characters, and unknown punctuation.
    UnexpectedCharacter,
    /// The end of input was reached inside a string literal.
    UnterminatedString,
}

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: LexErrorKind,
}

impl LexError {
    /// Creates an "unexpected character" error for `c`.
    pub fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character {:?}", c),
            span,
            kind: LexErrorKind::UnexpectedCharacter,
        }
    }

    /// Creates an "unterminated string" error for a literal whose
    /// closing quote was never found.
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "Unterminated string literal".to_string(),
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
