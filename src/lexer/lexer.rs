use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    arena::Arena,
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER: Regex = Regex::new("^[0-9]+").unwrap();
    static ref COMMENT: Regex = Regex::new("^#[^\n]*").unwrap();
}

/// A saved lexer position that [`Lexer::reset`] can return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    line: u32,
}

/// Pull-based tokenizer over an owned source buffer.
///
/// Token text is copied into the arena, so tokens outlive the lexer.
pub struct Lexer<'a> {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<str>,
    arena: &'a Arena,
}

impl<'a> Lexer<'a> {
    pub fn new(source: impl Into<String>, file: Option<String>, arena: &'a Arena) -> Lexer<'a> {
        let file_name: Rc<str> = match file {
            Some(file) => Rc::from(file),
            None => Rc::from("shell"),
        };

        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            file: file_name,
            arena,
        }
    }

    /// Reads the whole file at `path` and lexes it.
    pub fn from_file(path: impl AsRef<Path>, arena: &'a Arena) -> Result<Lexer<'a>, Error> {
        let path = path.as_ref();
        let file_name = path.display().to_string();

        match fs::read_to_string(path) {
            Ok(source) => {
                log::debug!("read {} bytes from {}", source.len(), file_name);
                Ok(Lexer::new(source, Some(file_name), arena))
            }
            Err(err) => Err(Error::new(
                ErrorImpl::SourceUnavailable {
                    path: file_name.clone(),
                    reason: err.to_string(),
                },
                Position(0, Rc::from(file_name)),
            )),
        }
    }

    /// Produces the next token. Past the end this keeps returning `FileEnd`.
    pub fn next_token(&mut self) -> Result<Token<'a>, Error> {
        self.skip_whitespace();

        let remainder = &self.source[self.pos..];
        let Some(c) = remainder.chars().next() else {
            return self.emit(TokenKind::FileEnd, 0);
        };

        if let Some(matched) = IDENTIFIER.find(remainder) {
            let len = matched.end();
            let kind = RESERVED_LOOKUP
                .get(&remainder[..len])
                .copied()
                .unwrap_or(TokenKind::Identifier);
            return self.emit(kind, len);
        }

        if let Some(matched) = NUMBER.find(remainder) {
            let len = matched.end();
            return self.emit(TokenKind::Number, len);
        }

        match c {
            '=' if remainder[1..].starts_with('>') => self.emit(TokenKind::Arrow, 2),
            '=' => self.emit(TokenKind::Equal, 1),
            '#' => {
                let len = COMMENT.find(remainder).map_or(1, |matched| matched.end());
                self.emit(TokenKind::Comment, len)
            }
            _ => match TokenKind::from_punctuation(c) {
                Some(kind) => self.emit(kind, 1),
                None => self.emit(TokenKind::Unknown, c.len_utf8()),
            },
        }
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            pos: self.pos,
            line: self.line,
        }
    }

    /// Rewinds (or fast-forwards) to a cursor taken from this lexer.
    pub fn reset(&mut self, cursor: Cursor) {
        self.pos = cursor.pos;
        self.line = cursor.line;
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<str> {
        Rc::clone(&self.file)
    }

    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.source.as_bytes().get(self.pos) {
            // `is_ascii_whitespace` leaves out vertical tab
            if !(byte.is_ascii_whitespace() || byte == b'\x0b') {
                break;
            }
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Result<Token<'a>, Error> {
        let arena = self.arena;
        let start = self.pos;
        let value = arena
            .copy_str(&self.source[start..start + len])
            .map_err(|err| Error::new(err, self.get_position()))?;
        self.pos += len;

        let token = MK_TOKEN!(kind, value, self.line);
        log::trace!("{}", token);
        Ok(token)
    }
}

/// Lexes `source` to completion, comments included, ending with one `FileEnd`.
pub fn tokenize<'a>(
    source: impl Into<String>,
    file: Option<String>,
    arena: &'a Arena,
) -> Result<Vec<Token<'a>>, Error> {
    let mut lex = Lexer::new(source, file, arena);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        tokens.push(token);

        if token.kind == TokenKind::FileEnd {
            return Ok(tokens);
        }
    }
}
