use crate::{
    ast::expressions::Expr,
    errors::errors::{Construct, Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing: one prefix handler, then infix handlers while the
/// next operator binds at least as tightly as `bp`.
pub fn parse_expr<'a>(parser: &mut Parser<'a>, bp: BindingPower) -> Result<&'a Expr<'a>, Error> {
    parser.within(Construct::Expr, |parser| {
        // First parse NUD
        let token = parser.current_token();
        let Some(nud) = parser.get_nud_lookup().get(&token.kind).copied() else {
            return Err(parser.error(ErrorImpl::UnexpectedToken {
                token: token.kind,
                text: token.value.to_string(),
            }));
        };

        let left = nud(parser)?;

        // Each folded operator makes the tree one level deeper
        let mut chained = 0;
        let result = parse_infix_chain(parser, left, bp, &mut chained);
        parser.ascend(chained);

        result
    })
}

fn parse_infix_chain<'a>(
    parser: &mut Parser<'a>,
    mut left: &'a Expr<'a>,
    bp: BindingPower,
    chained: &mut usize,
) -> Result<&'a Expr<'a>, Error> {
    loop {
        let token_kind = parser.current_token_kind();
        let power = parser.binding_power(token_kind);
        if power == BindingPower::Default || power < bp {
            return Ok(left);
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };

        parser.descend()?;
        *chained += 1;
        left = led(parser, left, power)?;
    }
}

pub fn parse_primary_expr<'a>(parser: &mut Parser<'a>) -> Result<&'a Expr<'a>, Error> {
    let token = parser.current_token();
    match token.kind {
        TokenKind::Number => {
            parser.advance()?;
            parser.alloc(Expr::Literal { value: token.value })
        }
        TokenKind::Identifier => {
            parser.advance()?;
            parser.alloc(Expr::Identifier { name: token.value })
        }
        _ => Err(parser.error(ErrorImpl::UnexpectedToken {
            token: token.kind,
            text: token.value.to_string(),
        })),
    }
}

pub fn parse_binary_expr<'a>(
    parser: &mut Parser<'a>,
    left: &'a Expr<'a>,
    bp: BindingPower,
) -> Result<&'a Expr<'a>, Error> {
    let operator_token = parser.advance()?;
    let right = parse_expr(parser, bp.next())?;

    parser.alloc(Expr::Binary {
        left,
        operator: operator_token.kind,
        right,
    })
}

pub fn parse_prefix_expr<'a>(parser: &mut Parser<'a>) -> Result<&'a Expr<'a>, Error> {
    let operator_token = parser.advance()?;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    parser.alloc(Expr::Unary {
        operator: operator_token.kind,
        operand,
    })
}

pub fn parse_grouping_expr<'a>(parser: &mut Parser<'a>) -> Result<&'a Expr<'a>, Error> {
    parser.expect(TokenKind::LeftParen)?;
    let inner = parse_expr(parser, BindingPower::Assignment)?;
    parser.expect(TokenKind::RightParen)?;

    parser.alloc(Expr::Paren { inner })
}

pub fn parse_call_expr<'a>(
    parser: &mut Parser<'a>,
    left: &'a Expr<'a>,
    _bp: BindingPower,
) -> Result<&'a Expr<'a>, Error> {
    if !left.is_callable() {
        return Err(parser.error(ErrorImpl::NotCallable {
            callee: left.to_string(),
        }));
    }

    parser.within(Construct::CallArgs, |parser| {
        parser.expect(TokenKind::LeftParen)?;

        let mut args = vec![];
        if parser.current_token_kind() != TokenKind::RightParen {
            args.push(parse_expr(parser, BindingPower::Assignment)?);
            while parser.current_token_kind() == TokenKind::Comma {
                parser.advance()?;
                args.push(parse_expr(parser, BindingPower::Assignment)?);
            }
        }

        parser.expect(TokenKind::RightParen)?;

        let arguments = parser.alloc_slice(&args)?;
        parser.alloc(Expr::Call {
            callee: left,
            arguments,
        })
    })
}
