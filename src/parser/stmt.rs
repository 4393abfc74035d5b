use crate::{
    ast::{
        ast::{FunctionDecl, Param},
        statements::{ScopeStmt, Stmt},
    },
    errors::errors::{Construct, Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    parser.within(Construct::ExprStmt, |parser| {
        let expression = parse_expr(parser, BindingPower::Assignment)?;
        parser.expect(TokenKind::SemiColon)?;

        parser.alloc(Stmt::Expression { expression })
    })
}

pub fn parse_let_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    parser.within(Construct::LetStmt, |parser| {
        parser.expect(TokenKind::Let)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        parser.expect(TokenKind::Equal)?;
        let initializer = parse_expr(parser, BindingPower::Assignment)?;
        parser.expect(TokenKind::SemiColon)?;

        parser.alloc(Stmt::Let {
            name,
            ty,
            initializer,
        })
    })
}

pub fn parse_return_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    parser.within(Construct::ReturnStmt, |parser| {
        parser.expect(TokenKind::Return)?;
        let value = parse_expr(parser, BindingPower::Assignment)?;
        parser.expect(TokenKind::SemiColon)?;

        parser.alloc(Stmt::Return { value })
    })
}

/// `if` condition scope, optionally followed by `else if ...` or `else` scope.
pub fn parse_if_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    parser.within(Construct::IfStmt, |parser| {
        parser.expect(TokenKind::If)?;

        let condition = parse_expr(parser, BindingPower::Assignment)?;
        let then_branch = parse_scope_stmt(parser)?;

        let else_branch = if parser.current_token().is(TokenKind::Else) {
            parser.advance()?;
            if parser.current_token().is(TokenKind::If) {
                Some(parse_if_stmt(parser)?)
            } else {
                Some(parse_scope_stmt(parser)?)
            }
        } else {
            None
        };

        parser.alloc(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    })
}

pub fn parse_scope<'a>(parser: &mut Parser<'a>) -> Result<ScopeStmt<'a>, Error> {
    parser.within(Construct::Scope, |parser| {
        parser.expect(TokenKind::LeftCurly)?;

        let mut statements = Vec::new();
        while !parser
            .current_token()
            .is_one_of_many(&[TokenKind::RightCurly, TokenKind::FileEnd])
        {
            statements.push(parse_stmt(parser)?);
        }

        if parser.current_token().is(TokenKind::FileEnd) {
            return Err(parser.error(ErrorImpl::UnterminatedScope));
        }

        parser.expect(TokenKind::RightCurly)?;

        Ok(ScopeStmt {
            body: parser.alloc_slice(&statements)?,
        })
    })
}

pub fn parse_scope_stmt<'a>(parser: &mut Parser<'a>) -> Result<&'a Stmt<'a>, Error> {
    let scope = parse_scope(parser)?;
    parser.alloc(Stmt::Scope(scope))
}

pub fn parse_param<'a>(parser: &mut Parser<'a>) -> Result<&'a Param<'a>, Error> {
    parser.within(Construct::Param, |parser| {
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;

        parser.alloc(Param { name, ty })
    })
}

pub fn parse_fn_decl<'a>(parser: &mut Parser<'a>) -> Result<&'a FunctionDecl<'a>, Error> {
    parser.within(Construct::FunctionDecl, |parser| {
        parser.expect(TokenKind::Function)?;
        let name = parser.expect(TokenKind::Identifier)?.value;

        parser.expect(TokenKind::LeftParen)?;

        let mut parameters = Vec::new();
        if parser.current_token_kind() != TokenKind::RightParen {
            parameters.push(parse_param(parser)?);
            while parser.current_token_kind() == TokenKind::Comma {
                parser.advance()?;
                parameters.push(parse_param(parser)?);
            }
        }

        parser.expect(TokenKind::RightParen)?;
        parser.expect(TokenKind::Arrow)?;

        let return_type = parse_type(parser)?;
        let body = parse_scope(parser)?;

        log::debug!(
            "parsed function `{}` ({} parameter(s), {} statement(s))",
            name,
            parameters.len(),
            body.len()
        );

        parser.alloc(FunctionDecl {
            name,
            params: parser.alloc_slice(&parameters)?,
            return_type,
            body,
        })
    })
}
