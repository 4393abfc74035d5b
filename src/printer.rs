//! Depth-indented textual dump of a parsed program.
//!
//! One node per line, children two spaces deeper than their parent, in
//! exactly the order they were parsed:
//!
//! ```text
//! Function add
//!   Param a
//!     Type Int
//!   Returns
//!     Type Int
//!   Scope
//!     Return
//!       Binary Plus
//!         Identifier a
//!         Literal 1
//! ```
//!
//! Trees from the parser are never deeper than [`MAX_PRINT_DEPTH`]; deeper
//! hand-built subtrees are cut off with a `...` line.

use std::fmt::Write;

use crate::{
    ast::{
        ast::{FunctionDecl, Param},
        expressions::Expr,
        statements::{ScopeStmt, Stmt},
        types::TypeNode,
    },
    parser::parser::MAX_NESTING_DEPTH,
};

/// Deepest indentation level the printer descends to.
pub const MAX_PRINT_DEPTH: usize = 2 * MAX_NESTING_DEPTH + 4;

pub fn print_program(functions: &[&FunctionDecl]) -> String {
    let mut out = String::new();
    for function in functions {
        print_function(&mut out, function);
    }
    out
}

pub fn print_function(out: &mut String, function: &FunctionDecl) {
    line(out, 0, format_args!("Function {}", function.name));
    for param in function.params {
        print_param(out, param, 1);
    }
    line(out, 1, format_args!("Returns"));
    print_type(out, function.return_type, 2);
    print_scope(out, &function.body, 1);
}

fn print_param(out: &mut String, param: &Param, depth: usize) {
    line(out, depth, format_args!("Param {}", param.name));
    print_type(out, param.ty, depth + 1);
}

pub fn print_type(out: &mut String, ty: &TypeNode, depth: usize) {
    if cut_off(out, depth) {
        return;
    }
    line(out, depth, format_args!("Type {}", ty.name));
    for arg in ty.type_args {
        print_type(out, arg, depth + 1);
    }
}

fn print_scope(out: &mut String, scope: &ScopeStmt, depth: usize) {
    line(out, depth, format_args!("Scope"));
    for stmt in scope.iter() {
        print_stmt(out, stmt, depth + 1);
    }
}

pub fn print_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    if cut_off(out, depth) {
        return;
    }
    match stmt {
        Stmt::Let {
            name,
            ty,
            initializer,
        } => {
            line(out, depth, format_args!("Let {}", name));
            print_type(out, ty, depth + 1);
            print_expr(out, initializer, depth + 1);
        }
        Stmt::Return { value } => {
            line(out, depth, format_args!("Return"));
            print_expr(out, value, depth + 1);
        }
        Stmt::Expression { expression } => {
            line(out, depth, format_args!("ExprStmt"));
            print_expr(out, expression, depth + 1);
        }
        Stmt::Scope(scope) => print_scope(out, scope, depth),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            line(out, depth, format_args!("If"));
            print_expr(out, condition, depth + 1);
            print_stmt(out, then_branch, depth + 1);
            if let Some(else_branch) = else_branch {
                line(out, depth + 1, format_args!("Else"));
                print_stmt(out, else_branch, depth + 2);
            }
        }
    }
}

pub fn print_expr(out: &mut String, expr: &Expr, depth: usize) {
    if cut_off(out, depth) {
        return;
    }
    match expr {
        Expr::Identifier { name } => line(out, depth, format_args!("Identifier {}", name)),
        Expr::Literal { value } => line(out, depth, format_args!("Literal {}", value)),
        Expr::Unary { operator, operand } => {
            line(out, depth, format_args!("Unary {}", operator));
            print_expr(out, operand, depth + 1);
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            line(out, depth, format_args!("Binary {}", operator));
            print_expr(out, left, depth + 1);
            print_expr(out, right, depth + 1);
        }
        Expr::Paren { inner } => {
            line(out, depth, format_args!("Paren"));
            print_expr(out, inner, depth + 1);
        }
        Expr::Call { callee, arguments } => {
            line(out, depth, format_args!("Call"));
            print_expr(out, callee, depth + 1);
            for argument in arguments.iter() {
                print_expr(out, argument, depth + 1);
            }
        }
    }
}

fn cut_off(out: &mut String, depth: usize) -> bool {
    if depth <= MAX_PRINT_DEPTH {
        return false;
    }
    line(out, depth, format_args!("..."));
    true
}

fn line(out: &mut String, depth: usize, args: std::fmt::Arguments) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:indent$}{}", "", args, indent = depth * 2);
}
