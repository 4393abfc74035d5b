//! Error types and error handling for the front end.
//!
//! Every failure is fatal: the lexer and parser stop at the first error
//! and hand it back as an [`errors::Error`] carrying:
//!
//! - The error kind ([`errors::ErrorImpl`])
//! - The 1-based source line and source name
//! - The grammar rule being parsed, when there is one
//! - A human readable tip for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
