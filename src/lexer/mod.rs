//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens on demand for the parser. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and punctuation
//! - `=` / `=>` lookahead
//! - Line comments starting with `#`
//! - Line tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
