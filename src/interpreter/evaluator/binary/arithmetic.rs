use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        source::Position,
        types::{BaseType, Type},
        value::core::Value,
    },
    util::num::{i64_to_f64, repeat_count},
};

/// A value of arithmetic rank, after `bool` has been widened to `int`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An `int`, or a `bool` as `0`/`1`.
    Int(i64),
    /// A `flt`.
    Float(f64),
}

impl Number {
    /// The arithmetic view of `value`, if it has one.
    ///
    /// Strings, callables and `none` have no arithmetic rank.
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(Self::Int(*n)),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Float(x) => Some(Self::Float(*x)),
            Value::String(_) | Value::Callable(_) | Value::None => None,
        }
    }

    /// The value widened to `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }

    /// Whether the number is non-zero.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Int(n) => n != 0,
            Self::Float(x) => x != 0.0,
        }
    }
}

impl Context {
    /// Evaluates `+ - * /`.
    ///
    /// - `+` concatenates when either operand is a string; the other operand
    ///   is converted to its string form.
    /// - `*` between a string and an `int` repeats the string, in either
    ///   operand order.
    /// - Otherwise both operands need arithmetic rank. The result is a `flt`
    ///   if either side is one and an `int` otherwise; `int` arithmetic is
    ///   checked and `int` division truncates toward zero.
    ///
    /// # Errors
    /// - `RuntimeError::UnsupportedOperator` for operands without arithmetic
    ///   rank.
    /// - `RuntimeError::Overflow` when `int` arithmetic leaves the 64-bit
    ///   range or a repeated string would not fit in memory.
    /// - `RuntimeError::DivisionByZero` for `int` division by zero.
    /// - `RuntimeError::NegativeRepeat` for a negative repeat count.
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: Value,
                           right: Value,
                           position: Position)
                           -> EvalResult<Value> {
        if matches!(op, BinaryOperator::Add) && (left.is_string() || right.is_string()) {
            return concatenate(left, right, position);
        }

        if matches!(op, BinaryOperator::Mul)
           && let (Value::String(text), Value::Int(count))
                  | (Value::Int(count), Value::String(text)) = (&left, &right)
        {
            return repeat(text, *count, position);
        }

        let (Some(a), Some(b)) = (Number::of(&left), Number::of(&right)) else {
            return Err(unsupported(op, &left, &right, position));
        };

        match (a, b) {
            (Number::Int(a), Number::Int(b)) => integer_op(op, a, b, position),
            (a, b) => Ok(Value::Float(float_op(op, a.as_f64(), b.as_f64()))),
        }
    }
}

fn concatenate(left: Value, right: Value, position: Position) -> EvalResult<Value> {
    let string = Type::var(BaseType::String);
    let left = left.cast_to(&string, position)?;
    let right = right.cast_to(&string, position)?;

    match (left, right) {
        (Value::String(mut a), Value::String(b)) => {
            a.push_str(&b);
            Ok(Value::String(a))
        },
        (left, right) => Err(unsupported(BinaryOperator::Add, &left, &right, position)),
    }
}

fn repeat(text: &str, count: i64, position: Position) -> EvalResult<Value> {
    let count = repeat_count(count, position)?;
    if text.is_empty() || count == 0 {
        return Ok(Value::String(String::new()));
    }

    // A `String` can hold at most `isize::MAX` bytes.
    let size = text.len()
                   .checked_mul(count)
                   .filter(|size| isize::try_from(*size).is_ok())
                   .ok_or(RuntimeError::Overflow { position })?;

    let mut repeated = String::new();
    repeated.try_reserve_exact(size)
            .map_err(|_| RuntimeError::Overflow { position })?;
    for _ in 0..count {
        repeated.push_str(text);
    }

    Ok(Value::String(repeated))
}

fn integer_op(op: BinaryOperator, a: i64, b: i64, position: Position) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            a.checked_div(b)
        },
        _ => return Err(unsupported(op, &Value::Int(a), &Value::Int(b), position)),
    };

    result.map(Value::Int).ok_or(RuntimeError::Overflow { position })
}

fn float_op(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        _ => a / b,
    }
}
