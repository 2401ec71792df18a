use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FuncSignature, Function, Program, VariableSignature},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            block::parse_block,
            types::parse_type,
            utils::{accept, expect, parse_identifier, peek_kind, peek_position},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_or(tokens)
}

/// Parses exactly one expression that must span the whole input.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or if anything other
/// than the end of input follows it.
///
/// # Example
/// ```
/// use arrowlang::{
///     ast::{Expr, LiteralValue},
///     interpreter::{lexer::tokenize, parser::core::parse_standalone_expression},
/// };
///
/// let tokens = tokenize("(((1)))").unwrap().tokens;
/// let expr = parse_standalone_expression(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(expr, Expr::Literal { value: LiteralValue::Int(1), .. }));
/// ```
pub fn parse_standalone_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::Eof)?;

    Ok(expr)
}

/// Parses a whole program: function definitions up to the end of input.
///
/// Grammar: `program := function_def* EOF`
///
/// # Errors
/// Returns the first `ParseError` encountered; no partial program is
/// produced.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut functions = Vec::new();

    while peek_kind(tokens) != TokenKind::Eof {
        functions.push(Rc::new(parse_function(tokens)?));
    }
    expect(tokens, TokenKind::Eof)?;

    Ok(Program { functions })
}

/// Parses a function definition.
///
/// The `::` introducing the parameter list may be left out when the function
/// takes no parameters.
///
/// Grammar:
/// ```text
/// function_def := type identifier ["::" [param ("," param)*]] block
/// param        := type identifier
/// ```
///
/// # Errors
/// - `UnexpectedToken` for a malformed signature.
/// - `VoidParameter` when a parameter is declared `void`.
pub fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Function>
    where I: Iterator<Item = &'a Token>
{
    let position = peek_position(tokens);
    let ret = parse_type(tokens)?;
    let (name, _) = parse_identifier(tokens)?;

    let mut params = Vec::new();
    if accept(tokens, TokenKind::FuncSign).is_some() && peek_kind(tokens) != TokenKind::LBlock {
        loop {
            params.push(parse_param(tokens)?);

            if accept(tokens, TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    let body = parse_block(tokens)?;
    tracing::debug!(function = %name, params = params.len(), "parsed function");

    Ok(Function { signature: FuncSignature { ret,
                                             name,
                                             params,
                                             position },
                  body })
}

fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<VariableSignature>
    where I: Iterator<Item = &'a Token>
{
    let position = peek_position(tokens);
    let ty = parse_type(tokens)?;
    let (name, _) = parse_identifier(tokens)?;

    if ty.is_void() {
        return Err(ParseError::VoidParameter { name, position });
    }

    Ok(VariableSignature { name, ty })
}
