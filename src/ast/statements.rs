use std::slice::Iter;

use super::{expressions::Expr, types::TypeNode};

/// A `{ ... }` block. Function bodies and `if` branches are scopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeStmt<'a> {
    pub body: &'a [&'a Stmt<'a>],
}

impl<'a> ScopeStmt<'a> {
    pub fn iter(&self) -> Iter<'a, &'a Stmt<'a>> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, PartialEq)]
pub enum Stmt<'a> {
    /// `let name : Type = initializer;`
    Let {
        name: &'a str,
        ty: &'a TypeNode<'a>,
        initializer: &'a Expr<'a>,
    },
    Return { value: &'a Expr<'a> },
    Expression { expression: &'a Expr<'a> },
    Scope(ScopeStmt<'a>),
    /// `else if` chains nest another `If` as the else branch.
    If {
        condition: &'a Expr<'a>,
        then_branch: &'a Stmt<'a>,
        else_branch: Option<&'a Stmt<'a>>,
    },
}
