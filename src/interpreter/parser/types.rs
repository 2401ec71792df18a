use std::iter::Peekable;

use crate::interpreter::{
    lexer::{Token, TokenKind},
    parser::{
        core::ParseResult,
        utils::{expect, next_token, parse_comma_separated, peek_kind, unexpected},
    },
    types::{BaseType, FuncType, Type},
};

/// Parses a type annotation.
///
/// Grammar:
/// ```text
/// type      := "void" | ["mut"] base_type | func_type
/// base_type := "int" | "flt" | "string" | "bool"
/// func_type := "[" type "::" [type ("," type)*] "]"
/// ```
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a type, including
/// `mut void`.
pub fn parse_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Type>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::LFuncType => parse_func_type(tokens).map(Type::Func),
        TokenKind::Mut => {
            next_token(tokens)?;
            let token = next_token(tokens)?;

            match BaseType::from_keyword(token.kind) {
                Some(base) if base != BaseType::Void => Ok(Type::mutable(base)),
                _ => Err(unexpected(token, "a type after 'mut'")),
            }
        },
        _ => {
            let token = next_token(tokens)?;

            BaseType::from_keyword(token.kind).map(Type::var)
                                              .ok_or_else(|| unexpected(token, "a type"))
        },
    }
}

/// Parses a function type such as `[int::int, mut flt]` or `[void::]`.
///
/// # Errors
/// Returns a `ParseError` for missing brackets or `::`, or for a `void`
/// parameter type.
pub fn parse_func_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FuncType>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LFuncType)?;
    let ret = parse_type(tokens)?;
    expect(tokens, TokenKind::FuncSign)?;

    let params = parse_comma_separated(tokens, parse_param_type, TokenKind::RFuncType)?;

    Ok(FuncType::new(ret, params))
}

fn parse_param_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Type>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::VoidType
    {
        return Err(unexpected(token, "a parameter type"));
    }

    parse_type(tokens)
}
