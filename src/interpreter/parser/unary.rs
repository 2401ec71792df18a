use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenValue},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                accept, expect, next_token, parse_comma_separated, parse_identifier, peek_kind,
                unexpected,
            },
        },
        source::Position,
    },
};

/// Parses a unary expression.
///
/// Unary operators are right-associative, so `!-x` is parsed as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | factor
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match peek_kind(tokens) {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        _ => return parse_factor(tokens),
    };

    let position = next_token(tokens)?.position;
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     position })
}

/// Parses a factor: a literal, a decorator expression, or anything starting
/// with `(`.
///
/// Grammar:
/// ```text
///     factor := literal
///             | decorator
///             | call_or_group
/// ```
///
/// # Errors
/// Returns `ParseError::ExpectedExpression` if the next token cannot start a
/// factor.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::Int | TokenKind::Flt | TokenKind::String | TokenKind::Bool => {
            parse_literal(tokens)
        },
        TokenKind::Identifier => parse_decorator(tokens),
        TokenKind::LParen => parse_call_or_group(tokens),
        _ => {
            let token = next_token(tokens)?;
            Err(ParseError::ExpectedExpression { found:    token.to_string(),
                                                 position: token.position, })
        },
    }
}

/// Parses a literal token into an [`Expr::Literal`].
pub(crate) fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;

    let value = match (&token.kind, &token.value) {
        (TokenKind::Int, TokenValue::Int(n)) => LiteralValue::Int(*n),
        (TokenKind::Flt, TokenValue::Float(x)) => LiteralValue::Float(*x),
        (TokenKind::String, TokenValue::String(s)) => LiteralValue::String(s.clone()),
        (TokenKind::Bool, TokenValue::Bool(b)) => LiteralValue::Bool(*b),
        _ => return Err(unexpected(token, "a literal")),
    };

    Ok(Expr::Literal { value,
                       position: token.position })
}

/// Parses a decorator expression: an identifier, optionally decorated by a
/// second one.
///
/// `f @ g` becomes a binary `Decorate` node whose left operand `f` is later
/// bound as the first argument of `g`.
///
/// Grammar: `decorator := identifier ["@" identifier]`
pub(crate) fn parse_decorator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let (name, position) = parse_identifier(tokens)?;
    let left = Expr::Identifier { name, position };

    if accept(tokens, TokenKind::Decorate).is_none() {
        return Ok(left);
    }

    let (name, right_position) = parse_identifier(tokens)?;

    Ok(Expr::Binary { left: Box::new(left),
                      op: BinaryOperator::Decorate,
                      right: Box::new(Expr::Identifier { name,
                                                         position: right_position }),
                      position })
}

/// Parses everything that starts with `(`.
///
/// The parenthesized, comma-separated list is parsed first. What it means is
/// only known from the token after `)`:
///
/// 1. `->>` makes it the argument list of a bind-front,
/// 2. `->` makes it the argument list of a call,
/// 3. otherwise a single expression is a parenthesized group.
///
/// Grammar:
/// ```text
///     call_or_group := "(" [expression ("," expression)*] ")" [continuation]
///     continuation  := "->>" decorator
///                    | "->" callee
/// ```
///
/// # Errors
/// Returns `ParseError::DanglingArgumentList` when a list of zero or several
/// expressions is followed by neither `->` nor `->>`.
pub(crate) fn parse_call_or_group<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::LParen)?.position;
    let args = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;

    match parse_continuation(tokens, args, position)? {
        Ok(expr) => Ok(expr),
        Err(mut args) if args.len() == 1 => Ok(args.remove(0)),
        Err(args) => Err(ParseError::DanglingArgumentList { count: args.len(),
                                                            position }),
    }
}

/// Tries to attach a bind-front or call continuation to an argument list.
///
/// On success the returned expression owns `args`. When no continuation
/// follows, the untouched `args` are handed back to the caller.
fn parse_continuation<'a, I>(tokens: &mut Peekable<I>,
                             args: Vec<Expr>,
                             position: Position)
                             -> ParseResult<Result<Expr, Vec<Expr>>>
    where I: Iterator<Item = &'a Token>
{
    if accept(tokens, TokenKind::BindFront).is_some() {
        let callee = parse_decorator(tokens)?;

        return Ok(Ok(Expr::BindFront { callee: Box::new(callee),
                                       args,
                                       position }));
    }

    if accept(tokens, TokenKind::Call).is_some() {
        let callee = parse_callee(tokens)?;

        return Ok(Ok(Expr::Call { callee: Box::new(callee),
                                  args,
                                  position }));
    }

    Ok(Err(args))
}

/// Parses what may follow `->`: a decorator, or a parenthesized expression
/// that itself produces a callable, such as `(2) ->> add` or `(2) -> make`.
///
/// Grammar: `callee := decorator | call_or_group`
pub(crate) fn parse_callee<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == TokenKind::LParen {
        parse_call_or_group(tokens)
    } else {
        parse_decorator(tokens)
    }
}
