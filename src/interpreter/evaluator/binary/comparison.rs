use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{arithmetic::Number, core::unsupported},
            core::{Context, EvalResult},
        },
        source::Position,
        value::core::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the result.
///
/// An unordered pair (a `NaN` operand) satisfies only `!=`.
#[must_use]
pub fn comparison_result(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    match (op, ordering) {
        (BinaryOperator::NotEqual, None) => true,
        (_, None) => false,
        (BinaryOperator::Less, Some(ordering)) => ordering.is_lt(),
        (BinaryOperator::Greater, Some(ordering)) => ordering.is_gt(),
        (BinaryOperator::LessEqual, Some(ordering)) => ordering.is_le(),
        (BinaryOperator::GreaterEqual, Some(ordering)) => ordering.is_ge(),
        (BinaryOperator::Equal, Some(ordering)) => ordering.is_eq(),
        (_, Some(ordering)) => ordering.is_ne(),
    }
}

impl Context {
    /// Evaluates `< > <= >= == !=`.
    ///
    /// Two strings are compared by their length in characters, not by their
    /// content, so `"ab" == "cd"` holds. Two `int`s (or `bool`s) are compared
    /// exactly; any other pair of arithmetic values is compared as `flt`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOperator` when a string meets a
    /// number, or when either operand is a callable or `none`.
    ///
    /// # Example
    /// ```
    /// use arrowlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, source::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::default();
    /// let less = Context::eval_comparison(BinaryOperator::Less, &Value::Int(2), &Value::Float(2.5), at);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let same = Context::eval_comparison(BinaryOperator::Equal,
    ///                                     &Value::from("ab"),
    ///                                     &Value::from("cd"),
    ///                                     at);
    /// assert_eq!(same.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::String(a), Value::String(b)) => Some(a.chars().count().cmp(&b.chars().count())),
            _ => match (Number::of(left), Number::of(right)) {
                (Some(Number::Int(a)), Some(Number::Int(b))) => Some(a.cmp(&b)),
                (Some(a), Some(b)) => a.as_f64().partial_cmp(&b.as_f64()),
                _ => return Err(unsupported(op, left, right, position)),
            },
        };

        Ok(Value::Bool(comparison_result(op, ordering)))
    }
}
