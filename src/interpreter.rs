/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST of a program, starting at `main`. It manages
/// variables and call frames, binds arguments by reference or by value,
/// applies the weak typing rules and builds closures for bind-front and
/// decoration.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Implements the call protocol for program functions, bound callables and
///   builtins.
/// - Reports runtime errors such as invalid casts or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer is a table-driven state machine that reads one character at a
/// time and produces tokens for keywords, identifiers, literals and
/// operators, each tagged with its source position.
///
/// # Responsibilities
/// - Disambiguates multi-character operators such as `->`, `->>` and `=>`.
/// - Accumulates numeric and string literals, including escapes.
/// - Reports fatal lexical errors and recoverable warnings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. It
/// decides whether a parenthesized list is a group, a call or a bind-front
/// only after the closing parenthesis, without backtracking.
///
/// # Responsibilities
/// - Converts tokens into functions, statements and expressions.
/// - Enforces operator precedence and non-chaining comparisons.
/// - Reports syntax errors with the position of the offending token.
pub mod parser;
/// Character-level access to source text.
///
/// Provides positions (line and column) and a reader with one character of
/// lookahead and push-back, used by the lexer.
pub mod source;
/// The static type model.
///
/// Declares base types, variable types and function types, together with
/// the structural comparisons used when binding references and storing
/// callables.
pub mod types;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with: strings,
/// integers, floats, booleans and callables, plus the variables and
/// arguments that hold them and the weak-typing casts between them.
///
/// # Responsibilities
/// - Defines the `Value` enum and the callable variants.
/// - Implements the coercion table used for assignment and argument binding.
/// - Models variables as shared cells so they can be passed by reference.
pub mod value;
