use std::iter::Peekable;

use crate::{
    ast::{Assignment, ConditionalKind, Expr, ForIterator, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            types::parse_type,
            unary::parse_callee,
            utils::{expect, next_token, parse_identifier, peek_kind, peek_position, unexpected},
        },
        source::Position,
    },
};

/// Parses a single statement.
///
/// The leading keyword decides the form; anything else is an expression
/// statement that is either assigned or evaluated for its effects.
///
/// Grammar:
/// ```text
///     statement := conditional | while | for | return | assign_or_call
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::If => parse_conditional(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::For => parse_for(tokens),
        TokenKind::Ret => parse_return(tokens),
        _ => parse_assign_or_call(tokens),
    }
}

/// Parses an `if` or `elif` conditional together with the rest of its chain.
///
/// Grammar:
/// ```text
///     conditional := ("if" | "elif") condition block [conditional_tail]
///     conditional_tail := ("elif" condition block)* ["else" block]
/// ```
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = next_token(tokens)?;
    let kind = match keyword.kind {
        TokenKind::If => ConditionalKind::If,
        TokenKind::Elif => ConditionalKind::Elif,
        _ => return Err(unexpected(keyword, "'if' or 'elif'")),
    };

    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    let else_branch = match peek_kind(tokens) {
        TokenKind::Elif => Some(Box::new(parse_conditional(tokens)?)),
        TokenKind::Else => {
            let position = next_token(tokens)?.position;
            let body = parse_block(tokens)?;
            Some(Box::new(Statement::Else { body, position }))
        },
        _ => None,
    };

    Ok(Statement::Conditional { kind,
                                condition,
                                body,
                                else_branch,
                                position: keyword.position })
}

/// Grammar: `while := "while" condition block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::While)?.position;
    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          position })
}

/// Parses a `for` loop.
///
/// The part after `->` is called with the iterator variable after every
/// iteration; usually a builtin like `increment` or a bound closure.
///
/// Grammar:
/// ```text
///     for := "for" "(" (assignment | identifier ";") expression ")" block
///            "->" callee ";"
/// ```
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::For)?.position;
    expect(tokens, TokenKind::LParen)?;

    let iterator = parse_for_iterator(tokens)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    let body = parse_block(tokens)?;

    expect(tokens, TokenKind::Call)?;
    let on_iter = parse_callee(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::For { iterator,
                        condition,
                        body,
                        on_iter,
                        position })
}

fn parse_for_iterator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ForIterator>
    where I: Iterator<Item = &'a Token>
{
    let position = peek_position(tokens);
    let expr = parse_expression(tokens)?;

    if peek_kind(tokens) == TokenKind::Assign {
        return parse_assignment_tail(tokens, expr, position).map(ForIterator::Assign);
    }

    let token = next_token(tokens)?;
    match expr {
        Expr::Identifier { name, position } if token.kind == TokenKind::Semicolon => {
            Ok(ForIterator::Existing { name, position })
        },
        _ => Err(unexpected(token, "'=>' or an iterator name followed by ';'")),
    }
}

/// Grammar: `return := "ret" expression ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::Ret)?.position;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Return { value, position })
}

/// Parses a statement that starts with an expression.
///
/// Both forms begin with a full expression, so the expression is parsed first
/// and the following token decides between an assignment and an expression
/// statement.
///
/// Grammar:
/// ```text
///     assign_or_call := expression ("=>" [type] identifier ";" | ";")
/// ```
fn parse_assign_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = peek_position(tokens);
    let expr = parse_expression(tokens)?;

    if peek_kind(tokens) == TokenKind::Assign {
        return parse_assignment_tail(tokens, expr, position).map(Statement::Assign);
    }

    let token = next_token(tokens)?;
    if token.kind != TokenKind::Semicolon {
        return Err(unexpected(token, "'=>' or ';'"));
    }

    Ok(Statement::Call { expr, position })
}

/// Parses `=> [type] identifier ;` after an already parsed value.
fn parse_assignment_tail<'a, I>(tokens: &mut Peekable<I>,
                                value: Expr,
                                position: Position)
                                -> ParseResult<Assignment>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Assign)?;

    let declared = if peek_kind(tokens).starts_type() {
        Some(parse_type(tokens)?)
    } else {
        None
    };

    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Assignment { value,
                    declared,
                    name,
                    position })
}

/// Grammar: `condition := "(" expression ")"`
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(condition)
}
