//! Type parsing implementation.
//!
//! Types are a name optionally followed by generic arguments:
//!
//! ```text
//! Type := Identifier [ '<' Type { ',' Type } '>' ]
//! ```
//!
//! No bounds or variance are checked here.

use crate::{
    ast::types::TypeNode,
    errors::errors::{Construct, Error},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type<'a>(parser: &mut Parser<'a>) -> Result<&'a TypeNode<'a>, Error> {
    parser.within(Construct::Type, |parser| {
        let name = parser.expect(TokenKind::Identifier)?.value;

        let mut type_args = Vec::new();
        if parser.current_token_kind() == TokenKind::LessThan {
            parser.advance()?;
            type_args.push(parse_type(parser)?);

            while parser.current_token_kind() == TokenKind::Comma {
                parser.advance()?;
                type_args.push(parse_type(parser)?);
            }

            parser.expect(TokenKind::GreaterThan)?;
        }

        parser.alloc(TypeNode {
            name,
            type_args: parser.alloc_slice(&type_args)?,
        })
    })
}
