use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        source::Position,
        types::{BaseType, FuncType, Type},
        value::{callable::BuiltIn, core::Value, variable::Arg},
    },
};

/// Defines the standard builtins by generating a constructor and a name list.
///
/// # Generated items
/// - `standard_builtins()` (a fresh `Vec<BuiltIn>` for a new context),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                signature: $signature:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The builtins every context starts with.
        #[must_use]
        pub fn standard_builtins() -> Vec<BuiltIn> {
            vec![
                $(
                    BuiltIn { name: $name, signature: $signature, function: $func },
                )*
            ]
        }

        /// The names of the standard builtins.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "stdout"    => { signature: FuncType::new(Type::void(), vec![Type::var(BaseType::String)]),
                     func: stdout },
    "increment" => { signature: FuncType::new(Type::void(), vec![Type::mutable(BaseType::Int)]),
                     func: increment },
}

/// Writes a string to the context's output without a trailing newline.
///
/// The argument has already been coerced to `string`, so numbers and
/// booleans print in their string form.
///
/// # Example
/// ```
/// use arrowlang::{
///     interpreter::{
///         evaluator::function::builtin::stdout,
///         source::Position,
///         value::{core::Value, variable::Arg},
///     },
/// };
///
/// let mut out = Vec::new();
/// let result = stdout(&[Arg::Value(Value::from("hi"))], &mut out, Position::default()).unwrap();
///
/// assert_eq!(out, b"hi");
/// assert_eq!(result, Value::None);
/// ```
pub fn stdout(args: &[Arg], out: &mut dyn Write, position: Position) -> EvalResult<Value> {
    let text = first_argument(args, "stdout", position)?.value();

    write!(out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                               position })?;
    Ok(Value::None)
}

/// Adds one to an `int` variable in place.
///
/// Only a reference argument has a visible effect; a value argument is a copy
/// that is incremented and dropped.
///
/// # Errors
/// Returns `RuntimeError::Overflow` when the variable already holds
/// `i64::MAX`.
pub fn increment(args: &[Arg], _out: &mut dyn Write, position: Position) -> EvalResult<Value> {
    if let Arg::Reference(var_ref) = first_argument(args, "increment", position)? {
        let mut variable = var_ref.variable.borrow_mut();

        if let Value::Int(n) = variable.value {
            variable.value = Value::Int(n.checked_add(1)
                                         .ok_or(RuntimeError::Overflow { position })?);
        }
    }

    Ok(Value::None)
}

fn first_argument<'a>(args: &'a [Arg], name: &str, position: Position) -> EvalResult<&'a Arg> {
    args.first()
        .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                            expected: 1,
                                                            found: 0,
                                                            position })
}
