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

/// The truth value of a logical operand: non-empty for strings, non-zero for
/// arithmetic values. Callables and `none` have none.
fn truth(value: &Value) -> Option<bool> {
    match value {
        Value::String(s) => Some(!s.is_empty()),
        other => Number::of(other).map(Number::is_truthy),
    }
}

impl Context {
    /// Evaluates `&&` and `||`.
    ///
    /// Both operands have already been evaluated; there is no
    /// short-circuiting.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOperator` if either operand is a
    /// callable or `none`.
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: Position)
                      -> EvalResult<Value> {
        let (Some(a), Some(b)) = (truth(left), truth(right)) else {
            return Err(unsupported(op, left, right, position));
        };

        match op {
            BinaryOperator::And => Ok(Value::Bool(a && b)),
            BinaryOperator::Or => Ok(Value::Bool(a || b)),
            _ => Err(unsupported(op, left, right, position)),
        }
    }
}
