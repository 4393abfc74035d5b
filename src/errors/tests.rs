//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Construct, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at_line(line: u32) -> Position {
    Position(line, Rc::from("test.fe"))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: TokenKind::Unknown,
            text: "@".to_string(),
        },
        at_line(10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.line(), 10);
    assert_eq!(error.get_position().file(), "test.fe");
    assert_eq!(error.construct(), None);
}

#[test]
fn test_token_mismatch_tip_names_both_kinds() {
    let error = Error::new(
        ErrorImpl::TokenMismatch {
            expected: TokenKind::SemiColon,
            received: TokenKind::RightCurly,
        },
        at_line(3),
    );

    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `SemiColon`, found `RightCurly`"
    );
}

#[test]
fn test_innermost_construct_wins() {
    let error = Error::new(ErrorImpl::UnterminatedScope, at_line(1))
        .within(Construct::Scope)
        .within(Construct::FunctionDecl);

    assert_eq!(error.construct(), Some(Construct::Scope));
    assert_eq!(error.construct().unwrap().to_string(), "scope");
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::SourceUnavailable {
                path: "missing.fe".to_string(),
                reason: "not found".to_string(),
            },
            "SourceUnavailable",
        ),
        (ErrorImpl::UnterminatedScope, "UnterminatedScope"),
        (
            ErrorImpl::NotCallable {
                callee: "1".to_string(),
            },
            "NotCallable",
        ),
        (
            ErrorImpl::ArenaExhausted {
                requested: 64,
                capacity: 16,
            },
            "ArenaExhausted",
        ),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, at_line(1)).get_error_name(), name);
    }
}

#[test]
fn test_arena_exhausted_has_no_tip() {
    let error = Error::new(
        ErrorImpl::ArenaExhausted {
            requested: 64,
            capacity: 16,
        },
        at_line(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_not_callable_tip_names_accepted_callees() {
    let error = Error::new(
        ErrorImpl::NotCallable {
            callee: "1".to_string(),
        },
        at_line(3),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "`1` cannot be called, only identifiers or parenthesised identifiers can"
    );
}

#[test]
fn test_error_display_includes_line() {
    let error = Error::new(
        ErrorImpl::TokenMismatch {
            expected: TokenKind::Identifier,
            received: TokenKind::Arrow,
        },
        at_line(7),
    );

    assert_eq!(
        error.to_string(),
        "expected Identifier, received Arrow (line 7)"
    );
}
