use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        source::Position,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// An exhausted stream reports [`TokenKind::Eof`].
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Returns the position of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_position<'a, I>(tokens: &mut Peekable<I>) -> Position
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or_else(Position::default, |token| token.position)
}

/// Consumes the next token.
///
/// # Errors
/// Returns a `ParseError` if the stream is exhausted.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or_else(|| ParseError::UnexpectedToken { expected: "more input".into(),
                                                              found:    TokenKind::Eof.to_string(),
                                                              position: Position::default(), })
}

/// Consumes the next token if it has the given kind.
pub(in crate::interpreter::parser) fn accept<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == kind)
}

/// Consumes the next token, which must have the given kind.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming `kind` when the next token is
/// anything else.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;

    if token.kind == kind {
        Ok(token)
    } else {
        Err(unexpected(token, format!("'{kind}'")))
    }
}

/// Builds the error for finding `token` where `expected` was required.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: impl Into<String>)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found:    token.to_string(),
                                  position: token.position, }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;

    match token.identifier() {
        Some(name) => Ok((name.to_string(), token.position)),
        None => Err(unexpected(token, "an identifier")),
    }
}

/// Parses a comma-separated list of items up to and including a closing token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := [item ("," item)*] closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list (`)` or `]`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or if anything other than
/// a comma or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();

    if accept(tokens, closing).is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        let token = next_token(tokens)?;
        match token.kind {
            TokenKind::Comma => {},
            kind if kind == closing => break,
            _ => return Err(unexpected(token, format!("',' or '{closing}'"))),
        }
    }

    Ok(items)
}
