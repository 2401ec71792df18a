use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::arithmetic::Number,
            core::{Context, EvalResult},
        },
        source::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation. A `flt` stays a `flt`; an `int` or a
    ///   `bool` yields an `int`.
    /// - `Not`: logical negation of the operand's truth value, yielding a
    ///   `bool`.
    ///
    /// Both require an operand of arithmetic rank.
    ///
    /// # Errors
    /// - `RuntimeError::UnsupportedUnaryOperator` for strings, callables and
    ///   `none`.
    /// - `RuntimeError::Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use arrowlang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, source::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::default();
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, Value::Bool(true), at).unwrap(),
    ///            Value::Int(-1));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, Value::Float(0.0), at).unwrap(),
    ///            Value::Bool(true));
    /// assert!(Context::eval_unary(UnaryOperator::Not, Value::from("x"), at).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        let Some(number) = Number::of(&value) else {
            return Err(RuntimeError::UnsupportedUnaryOperator { op: op.to_string(),
                                                                operand: value.kind_name()
                                                                              .to_string(),
                                                                position });
        };

        match op {
            UnaryOperator::Negate => match number {
                Number::Int(n) => n.checked_neg()
                                   .map(Value::Int)
                                   .ok_or(RuntimeError::Overflow { position }),
                Number::Float(x) => Ok(Value::Float(-x)),
            },
            UnaryOperator::Not => Ok(Value::Bool(!number.is_truthy())),
        }
    }
}
