use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The grammar rule that was being parsed when an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    FunctionDecl,
    Param,
    Type,
    Scope,
    LetStmt,
    ReturnStmt,
    IfStmt,
    ExprStmt,
    Expr,
    CallArgs,
}

impl Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Construct::FunctionDecl => "function declaration",
            Construct::Param => "parameter",
            Construct::Type => "type",
            Construct::Scope => "scope",
            Construct::LetStmt => "let statement",
            Construct::ReturnStmt => "return statement",
            Construct::IfStmt => "if statement",
            Construct::ExprStmt => "expression statement",
            Construct::Expr => "expression",
            Construct::CallArgs => "call arguments",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone)]
#[error("{internal_error} (line {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    construct: Option<Construct>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            construct: None,
        }
    }

    /// Attaches the construct unless an inner rule already claimed the error.
    pub fn within(mut self, construct: Construct) -> Self {
        if self.construct.is_none() {
            self.construct = Some(construct);
        }
        self
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn construct(&self) -> Option<Construct> {
        self.construct
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TokenMismatch { .. } => "TokenMismatch",
            ErrorImpl::UnterminatedScope => "UnterminatedScope",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::ArenaExhausted { .. } => "ArenaExhausted",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { path, reason } => {
                ErrorTip::Suggestion(format!("could not read `{}`: {}", path, reason))
            }
            ErrorImpl::UnexpectedToken { token, text } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}` ({}), expected an expression",
                text, token
            )),
            ErrorImpl::TokenMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, received
            )),
            ErrorImpl::UnterminatedScope => {
                ErrorTip::Suggestion(String::from("reached end of file, did you miss a `}`?"))
            }
            ErrorImpl::NotCallable { callee } => ErrorTip::Suggestion(format!(
                "`{}` cannot be called, only identifiers or parenthesised identifiers can",
                callee
            )),
            ErrorImpl::ArenaExhausted { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("cannot read source {path:?}: {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("unexpected token {token}: {text:?}")]
    UnexpectedToken { token: TokenKind, text: String },
    #[error("expected {expected}, received {received}")]
    TokenMismatch {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("unterminated scope")]
    UnterminatedScope,
    #[error("expression {callee:?} is not callable")]
    NotCallable { callee: String },
    #[error("arena exhausted: requested {requested} bytes with a capacity of {capacity}")]
    ArenaExhausted { requested: usize, capacity: usize },
}
