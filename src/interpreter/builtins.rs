//! Built-in functions of the Blink interpreter.
//!
//! Blink has a single built-in, `print`. It is resolved by name before
//! user definitions, so a user-defined `print` is unreachable.

use std::io::Write;

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::{Ast, AstKind};
use crate::token::Span;

impl<W: Write> Interpreter<W> {
    /// Executes the built-in `print`.
    ///
    /// Each argument is evaluated in order and produces one output
    /// line: a string result prints its literal content, and any other
    /// node prints an opaque identity placeholder naming its kind.
    /// Write failures on the sink are ignored.
    pub(super) fn builtin_print(&mut self, args: &[Ast], span: Span) -> Result<Ast, RuntimeError> {
        for arg in args {
            let visited = self.visit(arg)?;

            match &visited.kind {
                AstKind::StringLiteral(value) => {
                    writeln!(self.out, "{}", value).ok();
                }
                _ => {
                    writeln!(self.out, "<{}>", visited.kind_name()).ok();
                }
            }
        }

        Ok(Ast::new(AstKind::Noop, span))
    }
}
