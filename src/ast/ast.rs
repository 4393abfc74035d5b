use super::{statements::ScopeStmt, types::TypeNode};

/// `name : Type` in a function signature.
#[derive(Debug, PartialEq)]
pub struct Param<'a> {
    pub name: &'a str,
    pub ty: &'a TypeNode<'a>,
}

/// Top level declaration: `function name(params) => ReturnType { ... }`
#[derive(Debug, PartialEq)]
pub struct FunctionDecl<'a> {
    pub name: &'a str,
    pub params: &'a [&'a Param<'a>],
    pub return_type: &'a TypeNode<'a>,
    pub body: ScopeStmt<'a>,
}

/// Every declaration of a source file, in program order.
pub type Program<'a> = Vec<&'a FunctionDecl<'a>>;
