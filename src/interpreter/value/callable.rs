use std::{io::Write, rc::Rc};

use crate::{
    ast::Function,
    interpreter::{
        evaluator::core::EvalResult,
        source::Position,
        types::FuncType,
        value::{core::Value, variable::Arg},
    },
};

/// The native implementation behind a builtin.
///
/// Arguments arrive already checked against the builtin's signature: value
/// arguments are coerced into the parameter types and reference arguments
/// have a compatible type. Output goes to the interpreter's sink.
pub type BuiltinFn = fn(&[Arg], &mut dyn Write, Position) -> EvalResult<Value>;

/// A function defined in the program.
#[derive(Debug)]
pub struct GlobalFunction {
    /// The parsed definition, shared with the program.
    pub function: Rc<Function>,
    signature:    FuncType,
}

impl GlobalFunction {
    /// Wraps a parsed function.
    #[must_use]
    pub fn new(function: Rc<Function>) -> Self {
        let signature = function.func_type();
        Self { function, signature }
    }
}

/// A callable with some leading arguments already bound.
///
/// Produced by bind-front (`(1) ->> add`) and decoration (`f @ g`). Calling it
/// prepends the bound arguments to the supplied ones and calls `callee`.
#[derive(Debug)]
pub struct LocalFunction {
    /// The wrapped callable.
    pub callee: Rc<Callable>,
    /// Arguments passed before any supplied at call time.
    pub bound:  Vec<Arg>,
    signature:  FuncType,
}

impl LocalFunction {
    /// Binds `bound` to the front of `callee`'s parameters.
    ///
    /// The resulting type is `callee`'s type without the bound parameters.
    #[must_use]
    pub fn new(callee: Rc<Callable>, bound: Vec<Arg>) -> Self {
        let signature = callee.signature().without_leading(bound.len());
        Self { callee,
               bound,
               signature }
    }
}

/// A function implemented in Rust.
#[derive(Debug)]
pub struct BuiltIn {
    /// The name the program refers to it by.
    pub name:      &'static str,
    /// Parameter and return types checked before every call.
    pub signature: FuncType,
    /// The implementation.
    pub function:  BuiltinFn,
}

/// Anything that can be called with `->`.
#[derive(Debug)]
pub enum Callable {
    /// A function defined in the program.
    Global(GlobalFunction),
    /// A bound or decorated callable.
    Local(LocalFunction),
    /// A native function.
    BuiltIn(BuiltIn),
}

impl Callable {
    /// The name used in error messages. Bound callables report the name of
    /// the callable they wrap.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Global(global) => &global.function.signature.name,
            Self::Local(local) => local.callee.name(),
            Self::BuiltIn(builtin) => builtin.name,
        }
    }

    /// The structural type of this callable.
    #[must_use]
    pub const fn signature(&self) -> &FuncType {
        match self {
            Self::Global(global) => &global.signature,
            Self::Local(local) => &local.signature,
            Self::BuiltIn(builtin) => &builtin.signature,
        }
    }
}
