//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Function declarations, parameters and return types
//! - Statement parsing (`let`, `return`, `if`/`else`, expression statements, scopes)
//! - Expression parsing (binary and unary operators, grouping, calls)
//! - Type annotations with generic arguments
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
