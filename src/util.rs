/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `f64` and `usize` that
/// the evaluator needs, reporting out-of-range values as runtime errors
/// instead of silently wrapping or saturating.
pub mod num;
