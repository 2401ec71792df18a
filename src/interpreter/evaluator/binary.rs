/// Operator dispatch.
///
/// Routes each binary operator to its family and reports operand kinds an
/// operator does not support.
pub mod core;

/// Arithmetic operators.
///
/// Implements `+ - * /` over the arithmetic rank (bool, int, flt), string
/// concatenation and string repetition.
pub mod arithmetic;

/// Comparison operators.
///
/// Implements `< > <= >= == !=` for numbers and strings.
pub mod comparison;

/// Logical operators.
///
/// Implements `&&` and `||` over truth values.
pub mod logic;
