use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Expression nodes. Children are links into the arena.
#[derive(Debug, PartialEq)]
pub enum Expr<'a> {
    /// A bare name, e.g. `x` or `print`.
    Identifier { name: &'a str },
    /// An integer literal, kept as its source text.
    Literal { value: &'a str },
    /// `!operand` or `-operand`. Purely syntactic.
    Unary {
        operator: TokenKind,
        operand: &'a Expr<'a>,
    },
    Binary {
        left: &'a Expr<'a>,
        operator: TokenKind,
        right: &'a Expr<'a>,
    },
    Paren { inner: &'a Expr<'a> },
    Call {
        callee: &'a Expr<'a>,
        arguments: &'a [&'a Expr<'a>],
    },
}

impl Expr<'_> {
    /// Identifiers are callable, and so is a parenthesised callable expression.
    pub fn is_callable(&self) -> bool {
        match self {
            Expr::Identifier { .. } => true,
            Expr::Paren { inner } => inner.is_callable(),
            Expr::Literal { .. }
            | Expr::Unary { .. }
            | Expr::Binary { .. }
            | Expr::Call { .. } => false,
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier { name } => write!(f, "{}", name),
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::Unary { operator, operand } => write!(f, "{}{}", operator.lexeme(), operand),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "{} {} {}", left, operator.lexeme(), right),
            Expr::Paren { inner } => write!(f, "({})", inner),
            Expr::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
