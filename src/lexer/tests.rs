//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Punctuation and the `=>` arrow
//! - Comments
//! - Line tracking and end of file behaviour

use crate::arena::Arena;

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    let arena = Arena::new();
    tokenize(source, Some("test.fe".to_string()), &arena)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("function let if else return"),
        vec![
            TokenKind::Function,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::FileEnd,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let arena = Arena::new();
    let source = "foo baz_123 _underscore CamelCase functional lets";
    let tokens = tokenize(source, Some("test.fe".to_string()), &arena).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value).collect();
    assert_eq!(
        values,
        vec!["foo", "baz_123", "_underscore", "CamelCase", "functional", "lets", ""]
    );
    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[6].kind, TokenKind::FileEnd);
}

#[test]
fn test_tokenize_numbers_are_integer_only() {
    let arena = Arena::new();
    let tokens = tokenize("42 3.14 -7", None, &arena).unwrap();

    let lexed: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value)).collect();
    assert_eq!(
        lexed,
        vec![
            (TokenKind::Number, "42"),
            (TokenKind::Number, "3"),
            (TokenKind::Dot, "."),
            (TokenKind::Number, "14"),
            (TokenKind::Minus, "-"),
            (TokenKind::Number, "7"),
            (TokenKind::FileEnd, ""),
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] < > + - * / ! . , : ; ' \""),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftCurly,
            TokenKind::RightCurly,
            TokenKind::LeftSquare,
            TokenKind::RightSquare,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Exclamation,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::SemiColon,
            TokenKind::SingleQuote,
            TokenKind::DoubleQuote,
            TokenKind::FileEnd,
        ]
    );
}

#[test]
fn test_tokenize_equal_and_arrow() {
    let arena = Arena::new();
    let tokens = tokenize("= => =>= ==", None, &arena).unwrap();

    let lexed: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value)).collect();
    assert_eq!(
        lexed,
        vec![
            (TokenKind::Equal, "="),
            (TokenKind::Arrow, "=>"),
            (TokenKind::Arrow, "=>"),
            (TokenKind::Equal, "="),
            (TokenKind::Equal, "="),
            (TokenKind::Equal, "="),
            (TokenKind::FileEnd, ""),
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let arena = Arena::new();
    let tokens = tokenize("let x # trailing words\n# whole line", None, &arena).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Comment);
    assert_eq!(tokens[2].value, "# trailing words");
    assert_eq!(tokens[2].line, 1);
    assert_eq!(tokens[3].kind, TokenKind::Comment);
    assert_eq!(tokens[3].value, "# whole line");
    assert_eq!(tokens[3].line, 2);
    assert_eq!(tokens[4].kind, TokenKind::FileEnd);
}

#[test]
fn test_tokenize_unknown_characters() {
    let arena = Arena::new();
    let tokens = tokenize("@ $é", None, &arena).unwrap();

    let lexed: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value)).collect();
    assert_eq!(
        lexed,
        vec![
            (TokenKind::Unknown, "@"),
            (TokenKind::Unknown, "$"),
            (TokenKind::Unknown, "é"),
            (TokenKind::FileEnd, ""),
        ]
    );
}

#[test]
fn test_line_is_one_plus_preceding_newlines() {
    let arena = Arena::new();
    let source = "function\n\n  main(\n) =>\r\n Int\t{ }\n";
    let tokens = tokenize(source, None, &arena).unwrap();

    let mut offset = 0;
    for token in &tokens[..tokens.len() - 1] {
        let found = source[offset..].find(token.value).unwrap() + offset;
        let newlines = source[..found].matches('\n').count() as u32;
        assert_eq!(token.line, newlines + 1, "token {}", token);
        offset = found + token.value.len();
    }

    let lines: Vec<u32> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 3, 3, 4, 4, 5, 5, 5, 6]);
}

#[test]
fn test_file_end_repeats() {
    let arena = Arena::new();
    let mut lexer = Lexer::new("x", None, &arena);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    let end = lexer.cursor();
    for _ in 0..3 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::FileEnd);
        assert_eq!(token.value, "");
        assert_eq!(lexer.cursor(), end);
    }
}

#[test]
fn test_cursor_restarts_lexing() {
    let arena = Arena::new();
    let mut lexer = Lexer::new("let\nx : Int", None, &arena);

    lexer.next_token().unwrap();
    let cursor = lexer.cursor();
    let first = lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.line(), 2);

    lexer.reset(cursor);
    let again = lexer.next_token().unwrap();
    assert_eq!(first, again);
    assert_eq!(again.value, "x");
    assert_eq!(again.line, 2);
}

#[test]
fn test_tokens_outlive_lexer() {
    let arena = Arena::new();
    let token = {
        let mut lexer = Lexer::new(String::from("answer"), None, &arena);
        lexer.next_token().unwrap()
    };

    assert_eq!(token.value, "answer");
}

#[test]
fn test_arena_exhaustion_surfaces_as_error() {
    let arena = Arena::with_capacity(0);
    let result = tokenize("function main", None, &arena);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "ArenaExhausted");
    assert_eq!(error.line(), 1);
}

#[test]
fn test_token_debug_format() {
    let arena = Arena::new();
    let tokens = tokenize("\nlet", None, &arena).unwrap();

    assert_eq!(tokens[0].to_string(), "2| Let: let");
}

#[test]
fn test_vertical_tab_is_whitespace() {
    let arena = Arena::new();
    let tokens = tokenize("let\x0bx", None, &arena).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Let, TokenKind::Identifier, TokenKind::FileEnd]
    );
    assert_eq!(tokens[1].value, "x");
}
