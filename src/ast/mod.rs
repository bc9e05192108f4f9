//! Abstract Syntax Tree definitions for the Blink language.
//!
//! This module defines the data structures that represent parsed Blink
//! programs. The AST is produced by the [`crate::parser`] and walked by
//! the [`crate::interpreter`].
//!
//! # Structure
//!
//! Blink's AST is a single sum type: every node is an [`Ast`] carrying an
//! [`AstKind`] and a source [`Span`](crate::token::Span). The root node
//! produced by the parser is always [`AstKind::Compound`], even for an
//! empty program.
//!
//! Nodes are pure data: name resolution state lives entirely in the
//! interpreter's [`Scope`](crate::scope::Scope), not on the nodes.
//! All payload strings are owned, cloned from token values at
//! construction, so token lifetime never constrains AST lifetime.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Evaluates the AST

use crate::token::Span;

/// The kind of an AST node in the Blink language.
///
/// This enum represents the different node shapes without source
/// location information. Use [`Ast`] for the full node with span.
#[derive(Debug, Clone)]
pub enum AstKind {
    /// A variable definition: `String name = value`.
    VarDef {
        /// The name of the variable being defined.
        name: String,
        /// The value expression. Stored unevaluated; the interpreter
        /// evaluates it each time the variable is referenced.
        value: Box<Ast>,
    },

    /// A function definition: `fn name(params) { body }`.
    FnDef {
        /// The name of the function.
        name: String,
        /// The parameter list, in declaration order. Each element is a
        /// [`Variable`](Self::Variable) node; the parser guarantees at
        /// least one parameter.
        params: Vec<Ast>,
        /// The function body, always a [`Compound`](Self::Compound).
        body: Box<Ast>,
    },

    /// A variable reference by name.
    Variable {
        /// The name of the referenced variable.
        name: String,
    },

    /// A function call: `name(args)`.
    FnCall {
        /// The name of the function being called.
        name: String,
        /// The argument expressions, in call order.
        args: Vec<Ast>,
    },

    /// A string literal value.
    ///
    /// The contained `String` is the raw content between the quotes.
    StringLiteral(String),

    /// An ordered sequence of statements.
    ///
    /// The program root is always a compound; function bodies are
    /// compounds as well.
    Compound(Vec<Ast>),

    /// An empty statement or expression.
    ///
    /// Produced for empty statements between semicolons and for
    /// expression positions holding none of the recognized forms.
    Noop,
}

/// An AST node in the Blink language with source location.
#[derive(Debug, Clone)]
pub struct Ast {
    /// The kind of this node.
    pub kind: AstKind,
    /// The source location of this node.
    pub span: Span,
}

impl Ast {
    /// Creates a new AST node with the given kind and span.
    pub fn new(kind: AstKind, span: Span) -> Self {
        Ast { kind, span }
    }

    /// Returns a short human-readable name for this node's kind.
    ///
    /// Used in diagnostics and in the identity placeholder printed for
    /// non-string values.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            AstKind::VarDef { .. } => "variable definition",
            AstKind::FnDef { .. } => "function definition",
            AstKind::Variable { .. } => "variable",
            AstKind::FnCall { .. } => "function call",
            AstKind::StringLiteral(_) => "string",
            AstKind::Compound(_) => "compound",
            AstKind::Noop => "noop",
        }
    }
}
