/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and repetition, comparisons and
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the function table, the call stack and the
/// expression dispatcher.
pub mod core;

/// Statement execution.
///
/// Runs blocks, conditionals, `while` loops, declarations and reassignments.
pub mod statement;

/// Evaluation of `for` loops.
///
/// Manages the iterator variable and calls the loop's `on_iter` callable
/// after every iteration.
pub mod for_loop;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument binding, and
/// return value computation.
pub mod function;
