/// Parser entry points and the expression root.
///
/// Contains the shared `ParseResult` alias, program and function definition
/// parsing, and the top of the expression precedence chain.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals, decorators, and the resolution of a
/// leading `(` into a group, a call or a bind-front.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from logical OR down to multiplication,
/// including the non-chaining comparison level.
pub mod binary;

/// Block parsing.
pub mod block;

/// Type annotation parsing.
///
/// Parses variable types with their mutability flag and bracketed function
/// types.
pub mod types;

/// Utility functions for the parser.
///
/// Provides lookahead helpers, token expectations and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Implements conditionals, loops, returns, assignments and expression
/// statements.
pub mod statement;
