use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Or,
    And,
    Equality,
    Compare,
    Sum,
    Factor,
    Unary,
    Call,
}

impl BindingPower {
    /// The next tighter level; parsing a right operand here makes operators left-associative.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::Or,
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Compare,
            BindingPower::Compare => BindingPower::Sum,
            BindingPower::Sum => BindingPower::Factor,
            BindingPower::Factor => BindingPower::Unary,
            BindingPower::Unary | BindingPower::Call => BindingPower::Call,
        }
    }
}

pub type StmtHandler<'a> = fn(&mut Parser<'a>) -> Result<&'a Stmt<'a>, Error>;
pub type NUDHandler<'a> = fn(&mut Parser<'a>) -> Result<&'a Expr<'a>, Error>;
pub type LEDHandler<'a> =
    fn(&mut Parser<'a>, &'a Expr<'a>, BindingPower) -> Result<&'a Expr<'a>, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::LessThan, BindingPower::Compare, parse_binary_expr);
    parser.led(TokenKind::GreaterThan, BindingPower::Compare, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Minus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Asterisk, BindingPower::Factor, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Factor, parse_binary_expr);

    parser.led(TokenKind::LeftParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Exclamation, parse_prefix_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<'a> = HashMap<TokenKind, StmtHandler<'a>>;
pub type NUDLookup<'a> = HashMap<TokenKind, NUDHandler<'a>>;
pub type LEDLookup<'a> = HashMap<TokenKind, LEDHandler<'a>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
