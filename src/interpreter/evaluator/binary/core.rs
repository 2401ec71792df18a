use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        source::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, relational and equality
    /// operators to `eval_comparison` and `&&`/`||` to `eval_logic`.
    /// Decoration needs the unevaluated operands and is handled by
    /// [`Context::eval`] instead.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOperator` for operand kinds the
    /// operator does not accept, plus the arithmetic errors (overflow,
    /// division by zero, negative repetition).
    ///
    /// # Example
    /// ```
    /// use arrowlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, source::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::default();
    /// let sum = Context::eval_binary(BinaryOperator::Add, Value::Int(3), Value::Float(0.5), at);
    /// assert_eq!(sum.unwrap(), Value::Float(3.5));
    ///
    /// let repeated = Context::eval_binary(BinaryOperator::Mul, Value::Int(2), Value::from("ab"), at);
    /// assert_eq!(repeated.unwrap(), Value::from("abab"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Decorate, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual,
            Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, position),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, &left, &right, position)
            },
            And | Or => Self::eval_logic(op, &left, &right, position),
            Decorate => Err(unsupported(op, &left, &right, position)),
        }
    }
}

/// Builds the error for an operator applied to kinds it does not accept.
pub(crate) fn unsupported(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> RuntimeError {
    RuntimeError::UnsupportedOperator { op: op.to_string(),
                                        left: left.kind_name().to_string(),
                                        right: right.kind_name().to_string(),
                                        position }
}
