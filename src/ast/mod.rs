/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Every node and every string in the tree lives in the parse's arena;
/// links between nodes are plain shared references bound to it.
///
/// Submodules:
/// - ast: Declarations (functions and their parameters)
/// - expressions: The expression enum
/// - statements: The statement enum and scopes
/// - types: Type annotations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
