use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a chain of one precedence level.
///
/// Operands are parsed with `parse_operand`; every operator accepted by
/// `accepts` combines the expression so far with the next operand, giving
/// left associativity. When `single` is set at most one operator is consumed,
/// which is how comparisons are kept from chaining.
fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                             parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                             accepts: fn(BinaryOperator) -> bool,
                             single: bool)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens)?;

    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && accepts(op)
    {
        tokens.next();
        let right = parse_operand(tokens)?;
        let position = left.position();

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              position };

        if single {
            break;
        }
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       parse_logical_and,
                       |op| op == BinaryOperator::Or,
                       false)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := comparison ("&&" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       parse_comparison,
                       |op| op == BinaryOperator::And,
                       false)
}

/// Parses a comparison.
///
/// Comparisons do not chain: `a < b < c` stops after `a < b` and leaves the
/// second `<` to whatever follows, which then fails to parse.
///
/// Grammar: `comparison := additive [("<" | ">" | "<=" | ">=" | "==" | "!=")
/// additive]`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens, parse_additive, is_comparison_op, true)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       parse_multiplicative,
                       |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                       false)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       parse_unary,
                       |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                       false)
}

/// Maps a token kind to the binary operator it spells, if any.
///
/// `@` is deliberately absent: decoration only appears between two
/// identifiers and is handled by the decorator parser.
///
/// # Example
/// ```
/// use arrowlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Lte), Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Decorate), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mult => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Lte => Some(BinaryOperator::LessEqual),
        TokenKind::Gte => Some(BinaryOperator::GreaterEqual),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::Neq => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Returns `true` for the six comparison operators.
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
