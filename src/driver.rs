//! Pipeline orchestration for the Blink CLI.
//!
//! The driver reads a source file and runs it through the lexer, the
//! parser, and the interpreter. Every failure is returned to `main`,
//! which owns the process exit decision.

use blink::interpreter::{Interpreter, RuntimeError};
use blink::lexer::{LexError, Lexer};
use blink::parser::{ParseError, Parser};

/// An error from any phase of the run.
///
/// This enum unifies errors from file reading, lexing, parsing, and
/// evaluation to simplify error handling in the pipeline.
pub(crate) enum CompileError {
    /// The source file could not be read.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during evaluation.
    Runtime(RuntimeError),
}

impl CompileError {
    /// Returns the process exit code for this error.
    ///
    /// An unreadable file exits 2; every lex, parse, and runtime error
    /// exits 1.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CompileError::FileRead { .. } => 2,
            CompileError::Lex(_) | CompileError::Parse(_) | CompileError::Runtime(_) => 1,
        }
    }
}

/// A failed run together with the context diagnostics need.
///
/// Boxed by [`run`] to keep the `Result` small on the success path.
pub(crate) struct FailedRun {
    filename: String,
    source: String,
    error: CompileError,
}

impl FailedRun {
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Runs a Blink source file.
///
/// Reads the file, tokenizes it, parses the tokens, and walks the
/// resulting tree. Program output goes to stdout as evaluation
/// proceeds.
///
/// # Errors
///
/// Returns a [`FailedRun`] carrying the failure and the source context
/// needed to report it.
pub(crate) fn run(file: &str) -> Result<(), Box<FailedRun>> {
    let source = std::fs::read_to_string(file).map_err(|io_err| {
        Box::new(FailedRun {
            filename: file.to_string(),
            source: String::new(),
            error: CompileError::FileRead {
                path: file.to_string(),
                source: io_err,
            },
        })
    })?;

    let fail = |error: CompileError| {
        Box::new(FailedRun {
            filename: file.to_string(),
            source: source.clone(),
            error,
        })
    };

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize().map_err(|e| fail(CompileError::Lex(e)))?;

    let mut parser = Parser::new(tokens);
    let root = parser.parse().map_err(|e| fail(CompileError::Parse(e)))?;

    let mut interpreter = Interpreter::new();
    interpreter
        .visit(&root)
        .map_err(|e| fail(CompileError::Runtime(e)))?;

    Ok(())
}
