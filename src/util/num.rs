use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, source::Position},
};

/// Smallest `f64` that no longer fits into an `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Widens an `i64` to `f64`.
///
/// Integers beyond `2^53` are rounded to the nearest representable float,
/// which is the usual host behavior for int-to-float promotion.
///
/// ## Example
/// ```
/// use arrowlang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64`, truncating toward zero.
///
/// ## Errors
/// Returns `RuntimeError::InvalidCast` if the value is NaN, infinite, or
/// outside the `i64` range after truncation.
///
/// ## Example
/// ```
/// use arrowlang::{interpreter::source::Position, util::num::f64_to_i64_truncating};
///
/// let position = Position::default();
/// assert_eq!(f64_to_i64_truncating(2.9, position).unwrap(), 2);
/// assert_eq!(f64_to_i64_truncating(-2.9, position).unwrap(), -2);
/// assert!(f64_to_i64_truncating(f64::NAN, position).is_err());
/// assert!(f64_to_i64_truncating(1e300, position).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncating(value: f64, position: Position) -> EvalResult<i64> {
    let truncated = value.trunc();

    if !truncated.is_finite() || truncated >= I64_UPPER_BOUND || truncated < -I64_UPPER_BOUND {
        return Err(RuntimeError::InvalidCast { from: format!("flt {value}"),
                                               to: "int".into(),
                                               position });
    }

    Ok(truncated as i64)
}

/// Converts a string repetition count into a `usize`.
///
/// ## Errors
/// - `RuntimeError::NegativeRepeat` if `count` is negative.
/// - `RuntimeError::Overflow` if `count` does not fit into `usize`.
pub fn repeat_count(count: i64, position: Position) -> EvalResult<usize> {
    if count < 0 {
        return Err(RuntimeError::NegativeRepeat { count, position });
    }

    usize::try_from(count).map_err(|_| RuntimeError::Overflow { position })
}
