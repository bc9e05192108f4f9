//! Evaluation error types.

use crate::token::Span;

/// The kind of evaluation error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A variable was referenced with no definition in scope.
    UndefinedVariable,
    /// A call named no built-in and no defined function.
    UndefinedMethod,
    /// A call supplied a different number of arguments than the
    /// function declares parameters.
    ArityMismatch,
    /// A function declares a parameter that is not a plain variable
    /// name, so no argument can be bound to it.
    InvalidParameter,
}

/// An error that occurred while evaluating a program.
///
/// Contains a human-readable message and the source location of the
/// node that failed, enabling rich error reporting. Evaluation errors
/// are not recoverable; the first one terminates the walk.
///
/// # See Also
///
/// * [`crate::parser::ParseError`] - Similar error type for syntax errors
#[derive(Debug)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
    /// The source location of the failing node.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    /// Creates an "undefined variable" error for `name`.
    pub fn undefined_variable(name: &str, span: Span) -> Self {
        RuntimeError {
            message: format!("Undefined variable `{}`", name),
            span,
            kind: RuntimeErrorKind::UndefinedVariable,
        }
    }

    /// Creates an "undefined method" error for a call to `name`.
    pub fn undefined_method(name: &str, span: Span) -> Self {
        RuntimeError {
            message: format!("Undefined method `{}`", name),
            span,
            kind: RuntimeErrorKind::UndefinedMethod,
        }
    }

    /// Creates an arity mismatch error for a call to `name`.
    pub fn arity_mismatch(name: &str, declared: usize, supplied: usize, span: Span) -> Self {
        RuntimeError {
            message: format!(
                "Function `{}` declares {} parameter(s) but the call supplies {} argument(s)",
                name, declared, supplied
            ),
            span,
            kind: RuntimeErrorKind::ArityMismatch,
        }
    }

    /// Creates an error for a parameter that is not a variable name.
    pub fn invalid_parameter(fn_name: &str, span: Span) -> Self {
        RuntimeError {
            message: format!(
                "Function `{}` declares a parameter that is not a variable name",
                fn_name
            ),
            span,
            kind: RuntimeErrorKind::InvalidParameter,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location of the failing node.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for RuntimeError {}
