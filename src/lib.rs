//! # arrowlang
//!
//! arrowlang is an interpreter for a small imperative language in which data
//! flows left to right: values are assigned with `=>` and functions are
//! called with `->`. Functions are first-class values that can be partially
//! applied with `->>` (bind-front) and decorated with `@`.
//!
//! The pipeline has three stages: a table-driven lexer, a recursive-descent
//! parser and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{Expr, Program},
    error::{Error, LexWarning},
    interpreter::{
        lexer::{Token, TokenKind, Tokens},
        parser::core::{parse_program, parse_standalone_expression},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Function`, `Statement` and `Expr`
/// types that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and executed by the evaluator.
///
/// # Responsibilities
/// - Defines closed sum types for every statement and expression form.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Renders error and warning messages together with the source lines around
/// them.
pub mod diagnostic;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program, plus the recoverable warnings of the lexer. Every error carries
/// the position it was raised at.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a crate-level [`Error`](error::Error) so `?` works across
///   stages.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together source reading, lexing, parsing, types, values
/// and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// The evaluation context, under the name embedders know it by.
pub use crate::interpreter::evaluator::core::Context as Interpreter;

/// A parsed program together with the warnings raised while lexing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The function definitions.
    pub program:  Program,
    /// Recoverable lexical problems, in source order.
    pub warnings: Vec<LexWarning>,
}

/// Splits source text into tokens.
///
/// The result ends with an `Eof` token and includes comment tokens.
///
/// # Errors
/// Returns the first fatal lexical error.
///
/// # Example
/// ```
/// use arrowlang::{interpreter::lexer::TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("1 => x;").unwrap().tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Int, TokenKind::Assign, TokenKind::Identifier, TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Tokens, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Lexes and parses a whole program.
///
/// Comment tokens are dropped before parsing.
///
/// # Errors
/// Returns the first lexical or syntax error.
pub fn parse(source: &str) -> Result<Parsed, Error> {
    let Tokens { tokens, warnings } = interpreter::lexer::tokenize(source)?;
    let program = parse_program(&mut code_tokens(&tokens).peekable())?;

    Ok(Parsed { program, warnings })
}

/// Lexes and parses a single expression spanning the whole input.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Example
/// ```
/// use arrowlang::{ast::Expr, parse_expression};
///
/// let expr = parse_expression("(1, 2) -> add").unwrap();
/// assert!(matches!(expr, Expr::Call { ref args, .. } if args.len() == 2));
/// assert!(parse_expression("(1, 2)").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    let Tokens { tokens, .. } = interpreter::lexer::tokenize(source)?;

    Ok(parse_standalone_expression(&mut code_tokens(&tokens).peekable())?)
}

/// Parses and evaluates a single expression with the standard builtins and
/// no variables in scope.
///
/// Output written by `stdout` goes to standard output.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Example
/// ```
/// use arrowlang::{eval, interpreter::value::core::Value};
///
/// assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Int(7));
/// assert_eq!(eval("\"ha\" * 3").unwrap(), Value::from("hahaha"));
/// ```
pub fn eval(source: &str) -> Result<Value, Error> {
    let expr = parse_expression(source)?;

    Ok(Interpreter::new().eval(&expr)?)
}

/// Parses a program and runs its `main` function.
///
/// Output written by `stdout` goes to standard output.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Example
/// ```
/// use arrowlang::run;
///
/// let source = "int square :: int x { ret x * x; }
///               int main { ret (7) -> square; }";
/// assert_eq!(run(source).unwrap(), 49);
/// ```
pub fn run(source: &str) -> Result<i64, Error> {
    let parsed = parse(source)?;

    Ok(Interpreter::new().run(&parsed.program)?)
}

fn code_tokens(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|token| token.kind != TokenKind::Comment)
}
