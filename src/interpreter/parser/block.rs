use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_kind},
        },
    },
};

/// Parses a block of statements delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns a `ParseError` if a brace is missing or a statement fails to
/// parse.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LBlock)?;

    let mut statements = Vec::new();
    while !matches!(peek_kind(tokens), TokenKind::RBlock | TokenKind::Eof) {
        statements.push(parse_statement(tokens)?);
    }

    expect(tokens, TokenKind::RBlock)?;

    Ok(Block { statements })
}
