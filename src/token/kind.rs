//! Token kinds for the Blink lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Blink language.

/// The kind of token recognized by the lexer.
///
/// Blink has no keyword tokens: `String`, `fn`, and `print` reach the
/// parser as ordinary [`Identifier`](Self::Identifier) tokens and are
/// recognized there by their textual value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier (variable name, function name, or keyword-by-value).
    ///
    /// Identifiers are maximal runs of ASCII alphanumeric characters
    /// (a-z, A-Z, 0-9). A digit may start an identifier.
    Identifier(String),

    /// A string literal enclosed in double quotes.
    ///
    /// The contained `String` is the raw content between the quotes.
    /// Blink has no escape sequences; every character up to the closing
    /// quote is taken verbatim.
    StringLiteral(String),

    /// An equals sign `=` in a variable definition.
    Equals,

    /// A semicolon `;` separating statements.
    Semi,

    /// A left parenthesis `(`.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{` opening a function body.
    LeftBrace,

    /// A right brace `}` closing a function body.
    RightBrace,

    /// A comma `,` separating parameters and arguments.
    Comma,

    /// End of file marker.
    ///
    /// The lexer returns this once the input is exhausted and keeps
    /// returning it on every subsequent call.
    Eof,
}
