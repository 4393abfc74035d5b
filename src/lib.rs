#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod arena;
pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// A 1-based source line together with the name of the source it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<str>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn file(&self) -> &str {
        &self.1
    }
}

/// Returns the text of the given 1-based line, without its terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n\nfunction f() => Int {\r\n  Testing { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some(""));
        assert_eq!(super::get_line_at_position(source, 3), Some("function f() => Int {"));
        assert_eq!(super::get_line_at_position(source, 4), Some("  Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_format_error_block() {
        use crate::{
            errors::errors::{Error, ErrorImpl},
            lexer::tokens::TokenKind,
            Position,
        };

        let error = Error::new(
            ErrorImpl::TokenMismatch {
                expected: TokenKind::Identifier,
                received: TokenKind::Arrow,
            },
            Position(2, std::rc::Rc::from("main.fe")),
        );
        let block = super::format_error(&error, "\nfunction f( => Int {}\n");

        assert!(block.starts_with("Error: TokenMismatch (expected `Identifier`, found `Arrow`)"));
        assert!(block.contains("-> main.fe:2"));
        assert!(block.contains("2 | function f( => Int {}"));
    }
}

/// Renders the diagnostic block for an error.
///
/// ```text
/// Error: TokenMismatch (expected `Identifier`, found `Arrow`)
/// -> main.fe:20
///    |
/// 20 | function f( => Int {}
///    |
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    match (error.get_tip(), error.construct()) {
        (ErrorTip::None, None) => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        (ErrorTip::None, Some(construct)) => out.push_str(&format!(
            "Error: {} in {}\n",
            error.get_error_name(),
            construct
        )),
        (tip, None) => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
        (tip, Some(construct)) => out.push_str(&format!(
            "Error: {} ({}) in {}\n",
            error.get_error_name(),
            tip,
            construct
        )),
    }
    out.push_str(&format!("-> {}:{}\n", position.file(), position.line()));

    if let Some(line_text) = get_line_at_position(source, position.line()) {
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}

/// Writes the diagnostic block for an error to stderr.
pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}
