//! Tree-walking evaluator for the Blink language.
//!
//! This module provides the [`Interpreter`] struct which executes a
//! program by recursively visiting its AST, without any intermediate
//! representation.
//!
//! # Overview
//!
//! The interpreter owns the program's single global [`Scope`] and an
//! output sink for the built-in `print`. Visiting a definition inserts
//! it into the scope; visiting a variable resolves it against the scope
//! and evaluates the stored value; visiting a call binds arguments to
//! parameter names and walks the function body.
//!
//! # Scope semantics
//!
//! Blink has one flat scope for the whole program. Parameter bindings
//! synthesized at call sites land in that same scope, so calls leave
//! their bindings behind, and because lookup is first-wins, a later
//! binding for the same name is shadowed by the earlier one for the
//! rest of the run. The end-to-end tests characterize this behavior.
//!
//! # Module Structure
//!
//! - [`error`] - Evaluation error types
//! - `builtins` - The built-in `print` function
//! - `tests` - Unit tests (test-only)
//!
//! # Examples
//!
//! ```
//! use blink::interpreter::Interpreter;
//! use blink::lexer::Lexer;
//! use blink::parser::Parser;
//!
//! let mut lexer = Lexer::new("print(\"hello\");");
//! let tokens = lexer.tokenize().unwrap();
//! let root = Parser::new(tokens).parse().unwrap();
//!
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! interpreter.visit(&root).unwrap();
//! assert_eq!(interpreter.into_output(), b"hello\n");
//! ```
//!
//! # See Also
//!
//! * [`crate::ast`] - The node types this module walks
//! * [`crate::scope`] - The name registry this module reads and writes

mod builtins;
mod error;


pub use error::{RuntimeError, RuntimeErrorKind};

use std::io::{self, Write};

use crate::ast::{Ast, AstKind};
use crate::scope::Scope;
use crate::token::Span;

/// A tree-walking interpreter for Blink programs.
///
/// The interpreter is single-threaded and synchronous: statements
/// execute in source order and arguments evaluate left to right.
/// Recursion depth follows program nesting, so an unboundedly recursive
/// program exhausts the call stack.
///
/// # Usage
///
/// Create an interpreter with [`Interpreter::new`] (printing to stdout)
/// or [`Interpreter::with_output`] (printing to any [`Write`] sink,
/// which tests use to capture output), then call
/// [`visit`](Interpreter::visit) with the parsed root node.
pub struct Interpreter<W: Write = io::Stdout> {
    /// The single global scope shared by the whole program.
    scope: Scope,
    /// Where the built-in `print` writes.
    out: W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter that prints to standard output.
    pub fn new() -> Self {
        Interpreter::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to the given sink.
    pub fn with_output(out: W) -> Self {
        Interpreter {
            scope: Scope::new(),
            out,
        }
    }

    /// Returns the interpreter's scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates a node and returns its result node.
    ///
    /// This is the interpreter's entry point as well as its recursion
    /// step; the driver calls it once with the root compound.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] when a variable or call cannot be
    /// resolved, or when a call is malformed (wrong arity, unusable
    /// parameter).
    pub fn visit(&mut self, node: &Ast) -> Result<Ast, RuntimeError> {
        match &node.kind {
            AstKind::VarDef { .. } => self.visit_var_def(node),
            AstKind::FnDef { .. } => self.visit_fn_def(node),
            AstKind::Variable { name } => self.visit_variable(name, node.span),
            AstKind::FnCall { name, args } => self.visit_fn_call(name, args, node.span),
            AstKind::StringLiteral(_) => Ok(node.clone()),
            AstKind::Compound(children) => self.visit_compound(children, node.span),
            AstKind::Noop => Ok(node.clone()),
        }
    }

    /// Registers a variable definition in the scope.
    ///
    /// The value stays unevaluated; it is evaluated on each reference.
    fn visit_var_def(&mut self, node: &Ast) -> Result<Ast, RuntimeError> {
        self.scope.add_var_def(node.clone());
        Ok(node.clone())
    }

    /// Registers a function definition in the scope.
    fn visit_fn_def(&mut self, node: &Ast) -> Result<Ast, RuntimeError> {
        self.scope.add_fn_def(node.clone());
        Ok(node.clone())
    }

    /// Resolves a variable reference and evaluates its stored value.
    fn visit_variable(&mut self, name: &str, span: Span) -> Result<Ast, RuntimeError> {
        if let Some(vdef) = self.scope.get_var_def(name) {
            if let AstKind::VarDef { value, .. } = &vdef.kind {
                let value = (**value).clone();
                return self.visit(&value);
            }
        }

        Err(RuntimeError::undefined_variable(name, span))
    }

    /// Executes a function call.
    ///
    /// `print` is handled by the built-in. For user functions, each
    /// parameter name is bound to the corresponding argument, left to
    /// right and unevaluated, by inserting a synthesized variable
    /// definition into the global scope; then the body is walked.
    fn visit_fn_call(&mut self, name: &str, args: &[Ast], span: Span) -> Result<Ast, RuntimeError> {
        if name == "print" {
            return self.builtin_print(args, span);
        }

        let Some(fdef) = self.scope.get_fn_def(name) else {
            return Err(RuntimeError::undefined_method(name, span));
        };

        let (params, body) = match &fdef.kind {
            AstKind::FnDef { params, body, .. } => (params.clone(), (**body).clone()),
            _ => return Err(RuntimeError::undefined_method(name, span)),
        };

        if params.len() != args.len() {
            return Err(RuntimeError::arity_mismatch(
                name,
                params.len(),
                args.len(),
                span,
            ));
        }

        for (param, arg) in params.iter().zip(args) {
            let AstKind::Variable { name: param_name } = &param.kind else {
                return Err(RuntimeError::invalid_parameter(name, param.span));
            };

            let binding = Ast::new(
                AstKind::VarDef {
                    name: param_name.clone(),
                    value: Box::new(arg.clone()),
                },
                arg.span,
            );
            self.scope.add_var_def(binding);
        }

        self.visit(&body)
    }

    /// Evaluates a statement list in order, discarding the results.
    fn visit_compound(&mut self, children: &[Ast], span: Span) -> Result<Ast, RuntimeError> {
        for child in children {
            self.visit(child)?;
        }

        Ok(Ast::new(AstKind::Noop, span))
    }
}
