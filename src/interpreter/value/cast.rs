use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        source::Position,
        types::{BaseType, Type, VarType},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncating, i64_to_f64},
};

impl Value {
    /// Coerces the value into `target` using the weak typing rules.
    ///
    /// | from \ to | int        | flt     | string    | bool        |
    /// |-----------|------------|---------|-----------|-------------|
    /// | int       | =          | widen   | decimal   | `!= 0`      |
    /// | flt       | truncate   | =       | decimal   | `!= 0.0`    |
    /// | bool      | `0` / `1`  | `0`/`1` | `"true"`  | =           |
    /// | string    | error      | error   | =         | non-empty   |
    ///
    /// A callable only passes into a function type that is structurally equal
    /// to its own. `none` and `void` never take part in a cast.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidCast` for every combination not listed
    /// above, and for floats that do not fit into an `int`.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::{
    ///     source::Position,
    ///     types::{BaseType, Type},
    ///     value::core::Value,
    /// };
    ///
    /// let at = Position::default();
    /// assert_eq!(Value::Float(3.9).cast_to(&Type::int(), at).unwrap(), Value::Int(3));
    /// assert_eq!(Value::from("").cast_to(&Type::var(BaseType::Bool), at).unwrap(),
    ///            Value::Bool(false));
    /// assert!(Value::from("12").cast_to(&Type::int(), at).is_err());
    /// ```
    pub fn cast_to(self, target: &Type, position: Position) -> EvalResult<Self> {
        use BaseType::{Bool, Flt, Int, String};

        let base = match target {
            Type::Func(expected) => {
                return match self {
                    Self::Callable(callable) if callable.signature() == expected => {
                        Ok(Self::Callable(callable))
                    },
                    other => Err(invalid_cast(&other, target, position)),
                };
            },
            Type::Var(VarType { base, .. }) => *base,
        };

        match (self, base) {
            (Self::Int(n), Int) => Ok(Self::Int(n)),
            (Self::Int(n), Flt) => Ok(Self::Float(i64_to_f64(n))),
            (Self::Int(n), String) => Ok(Self::String(n.to_string())),
            (Self::Int(n), Bool) => Ok(Self::Bool(n != 0)),
            (Self::Float(x), Int) => Ok(Self::Int(f64_to_i64_truncating(x, position)?)),
            (Self::Float(x), Flt) => Ok(Self::Float(x)),
            (Self::Float(x), String) => Ok(Self::String(x.to_string())),
            (Self::Float(x), Bool) => Ok(Self::Bool(x != 0.0)),
            (Self::Bool(b), Int) => Ok(Self::Int(i64::from(b))),
            (Self::Bool(b), Flt) => Ok(Self::Float(f64::from(u8::from(b)))),
            (Self::Bool(b), String) => Ok(Self::String(b.to_string())),
            (Self::Bool(b), Bool) => Ok(Self::Bool(b)),
            (Self::String(s), String) => Ok(Self::String(s)),
            (Self::String(s), Bool) => Ok(Self::Bool(!s.is_empty())),
            (other, _) => Err(invalid_cast(&other, target, position)),
        }
    }

    /// The value a variable of type `ty` holds before anything is assigned,
    /// also returned by non-`void` functions that finish without `ret`.
    ///
    /// # Errors
    /// Function types and `void` have no default value.
    pub fn default_for(ty: &Type, position: Position) -> EvalResult<Self> {
        match ty {
            Type::Var(VarType { base, .. }) => match base {
                BaseType::Int => Ok(Self::Int(0)),
                BaseType::Flt => Ok(Self::Float(0.0)),
                BaseType::String => Ok(Self::String(std::string::String::new())),
                BaseType::Bool => Ok(Self::Bool(false)),
                BaseType::Void => Err(invalid_cast(&Self::None, ty, position)),
            },
            Type::Func(_) => Err(invalid_cast(&Self::None, ty, position)),
        }
    }

    /// The truth value used by conditions: a cast to `bool`.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidCast` for `none` and callables.
    pub fn truthy(self, position: Position) -> EvalResult<bool> {
        match self.cast_to(&Type::var(BaseType::Bool), position)? {
            Self::Bool(b) => Ok(b),
            other => Err(invalid_cast(&other, &Type::var(BaseType::Bool), position)),
        }
    }
}

fn invalid_cast(value: &Value, target: &Type, position: Position) -> RuntimeError {
    RuntimeError::InvalidCast { from: value.kind_name().to_string(),
                                to: target.to_string(),
                                position }
}
