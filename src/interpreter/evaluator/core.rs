use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{BinaryOperator, Expr, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::function::builtin::standard_builtins,
        source::Position,
        value::{
            callable::{BuiltIn, Callable, GlobalFunction},
            core::Value,
            variable::{VarRef, VariableHandle},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The variables declared in one block, in declaration order.
#[derive(Debug, Default)]
pub struct BlockScope {
    /// Variables declared directly in this block.
    pub variables: Vec<VariableHandle>,
}

/// The state of one active function call.
#[derive(Debug, Default)]
pub struct CallStackFrame {
    /// Parameters, bound by reference or to fresh copies.
    pub args:   Vec<VarRef>,
    /// Nested block scopes, innermost last.
    pub scopes: Vec<BlockScope>,
}

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `ret` executed; unwind to the enclosing call.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the function table (builtins and
/// program functions), the frame of the call being executed with the frames
/// of its callers beneath it, and the sink `stdout` writes to.
///
/// ## Usage
///
/// A `Context` starts with one empty top-level frame, so standalone
/// expressions can be evaluated with [`Context::eval`]. [`Context::run`]
/// registers a program's functions and calls `main`.
///
/// # Example
/// ```
/// use arrowlang::{interpreter::evaluator::core::Context, parse};
///
/// let parsed = parse("int main { 2 => mut int a; a * 21 => a; ret a; }").unwrap();
/// assert_eq!(Context::new().run(&parsed.program).unwrap(), 42);
/// ```
pub struct Context {
    /// Every callable addressable by name.
    pub functions: HashMap<String, Rc<Callable>>,
    frame:         CallStackFrame,
    callers:       Vec<CallStackFrame>,
    output:        Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
         .field("functions", &self.functions.keys().collect::<Vec<_>>())
         .field("frame", &self.frame)
         .field("depth", &self.callers.len())
         .finish_non_exhaustive()
    }
}

impl Context {
    /// Creates a context with the standard builtins that writes to standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builtins(standard_builtins(), Box::new(io::stdout()))
    }

    /// Creates a context with the standard builtins that writes to `output`.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self::with_builtins(standard_builtins(), output)
    }

    /// Creates a context with a custom builtin set.
    #[must_use]
    pub fn with_builtins(builtins: Vec<BuiltIn>, output: Box<dyn Write>) -> Self {
        let functions = builtins.into_iter()
                                .map(|builtin| {
                                    (builtin.name.to_string(),
                                     Rc::new(Callable::BuiltIn(builtin)))
                                })
                                .collect();

        Self { functions,
               frame: CallStackFrame::default(),
               callers: Vec::new(),
               output }
    }

    /// Registers every function of `program` in the function table.
    ///
    /// # Errors
    /// - `RuntimeError::BuiltinFunctionRedefinition` if a function reuses a
    ///   builtin's name.
    /// - `RuntimeError::FunctionAlreadyDefined` if two functions share a name.
    pub fn load(&mut self, program: &Program) -> EvalResult<()> {
        for function in &program.functions {
            let signature = &function.signature;

            if let Some(existing) = self.functions.get(&signature.name) {
                return Err(match existing.as_ref() {
                               Callable::BuiltIn(_) => {
                                   RuntimeError::BuiltinFunctionRedefinition {
                                       name: signature.name.clone(),
                                       position: signature.position,
                                   }
                               },
                               _ => RuntimeError::FunctionAlreadyDefined {
                                   name: signature.name.clone(),
                                   position: signature.position,
                               },
                           });
            }

            self.functions.insert(signature.name.clone(),
                                  Rc::new(Callable::Global(GlobalFunction::new(Rc::clone(function)))));
        }

        Ok(())
    }

    /// Runs a program: registers its functions, calls `main` without
    /// arguments and returns the integer it produces.
    ///
    /// # Errors
    /// - `RuntimeError::MissingMain` if there is no `main` function.
    /// - `RuntimeError::InvalidMainResult` if `main` returns anything but an
    ///   `int`.
    /// - Any error raised while `main` runs.
    pub fn run(&mut self, program: &Program) -> EvalResult<i64> {
        self.load(program)?;

        let main = self.functions.get("main").cloned().ok_or(RuntimeError::MissingMain)?;
        let Callable::Global(global) = main.as_ref() else {
            return Err(RuntimeError::MissingMain);
        };
        let position = global.function.signature.position;

        let result = self.call(&main, Vec::new(), position)?;
        self.output
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                position })?;

        match result {
            Value::Int(code) => Ok(code),
            other => Err(RuntimeError::InvalidMainResult { found: other.kind_name().to_string(),
                                                           position }),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by the expression or any call
    /// it makes.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, position } => self.eval_identifier(name, *position),
            Expr::Unary { op,
                          operand,
                          position, } => {
                let operand = self.eval(operand)?;
                Self::eval_unary(*op, operand, *position)
            },
            Expr::Binary { left,
                           op: BinaryOperator::Decorate,
                           right,
                           position, } => self.eval_decorate(left, right, *position),
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::Call { callee,
                         args,
                         position, } => self.eval_call(callee, args, *position),
            Expr::BindFront { callee,
                              args,
                              position, } => self.eval_bind_front(callee, args, *position),
        }
    }

    /// Resolves a name to its current value.
    ///
    /// Variables and parameters take precedence over functions, so a local
    /// name hides a function of the same name.
    fn eval_identifier(&self, name: &str, position: Position) -> EvalResult<Value> {
        if let Some(var_ref) = self.resolve_variable(name) {
            return Ok(var_ref.value());
        }

        self.functions
            .get(name)
            .map(|callable| Value::Callable(Rc::clone(callable)))
            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                             position })
    }

    /// Looks a variable up in the current frame.
    ///
    /// Block scopes are searched innermost first, then the frame's
    /// parameters. Functions are not considered.
    #[must_use]
    pub fn resolve_variable(&self, name: &str) -> Option<VarRef> {
        let declared = self.frame
                           .scopes
                           .iter()
                           .rev()
                           .flat_map(|scope| scope.variables.iter().rev())
                           .find(|variable| variable.borrow().signature.name == name);

        if let Some(variable) = declared {
            return Some(VarRef::direct(Rc::clone(variable)));
        }

        self.frame.args.iter().find(|arg| arg.name == name).cloned()
    }

    /// The innermost block scope of the current frame, created on demand.
    pub(crate) fn innermost_scope(&mut self) -> &mut BlockScope {
        if self.frame.scopes.is_empty() {
            self.frame.scopes.push(BlockScope::default());
        }

        let last = self.frame.scopes.len() - 1;
        &mut self.frame.scopes[last]
    }

    pub(crate) fn push_scope(&mut self) {
        self.frame.scopes.push(BlockScope::default());
    }

    pub(crate) fn pop_scope(&mut self) {
        self.frame.scopes.pop();
    }

    /// Makes `frame` current, saving the caller's frame beneath it.
    pub(crate) fn push_frame(&mut self, frame: CallStackFrame) {
        let caller = std::mem::replace(&mut self.frame, frame);
        self.callers.push(caller);
        tracing::trace!(depth = self.callers.len(), "pushed frame");
    }

    /// Discards the current frame and resumes the caller's.
    pub(crate) fn pop_frame(&mut self) {
        self.frame = self.callers.pop().unwrap_or_default();
        tracing::trace!(depth = self.callers.len(), "popped frame");
    }

    /// The sink `stdout` writes to.
    pub(crate) fn output(&mut self) -> &mut dyn Write {
        self.output.as_mut()
    }
}
