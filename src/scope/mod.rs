//! Name registry for the Blink interpreter.
//!
//! This module provides [`Scope`], a flat registry of function and
//! variable definitions looked up by name. Blink has a single global
//! scope shared by the whole program, including function bodies:
//! definitions made anywhere, including parameter bindings synthesized
//! at call sites, land in the same registry.
//!
//! Lookup is linear and returns the **first** entry whose name matches.
//! Insertion never replaces an existing entry, so a redefinition is
//! shadowed by the original for the rest of the run. Tests pin this
//! first-wins behavior.
//!
//! # See Also
//!
//! * [`crate::interpreter`] - The sole reader and writer of the scope

use crate::ast::{Ast, AstKind};

/// A flat registry of named definitions.
///
/// Holds [`FnDef`](AstKind::FnDef) and [`VarDef`](AstKind::VarDef)
/// nodes in insertion order. The interpreter owns one `Scope` for the
/// duration of the program.
#[derive(Debug, Default)]
pub struct Scope {
    /// Function definitions in insertion order.
    fn_defs: Vec<Ast>,
    /// Variable definitions in insertion order.
    var_defs: Vec<Ast>,
}

impl Scope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Appends a function definition.
    ///
    /// The node must be a [`FnDef`](AstKind::FnDef). An existing entry
    /// with the same name is not replaced.
    pub fn add_fn_def(&mut self, fdef: Ast) {
        debug_assert!(matches!(fdef.kind, AstKind::FnDef { .. }));
        self.fn_defs.push(fdef);
    }

    /// Returns the first function definition with the given name.
    pub fn get_fn_def(&self, name: &str) -> Option<&Ast> {
        self.fn_defs.iter().find(|fdef| {
            matches!(&fdef.kind, AstKind::FnDef { name: fn_name, .. } if fn_name == name)
        })
    }

    /// Appends a variable definition.
    ///
    /// The node must be a [`VarDef`](AstKind::VarDef). An existing entry
    /// with the same name is not replaced.
    pub fn add_var_def(&mut self, vdef: Ast) {
        debug_assert!(matches!(vdef.kind, AstKind::VarDef { .. }));
        self.var_defs.push(vdef);
    }

    /// Returns the first variable definition with the given name.
    pub fn get_var_def(&self, name: &str) -> Option<&Ast> {
        self.var_defs.iter().find(|vdef| {
            matches!(&vdef.kind, AstKind::VarDef { name: var_name, .. } if var_name == name)
        })
    }
}
