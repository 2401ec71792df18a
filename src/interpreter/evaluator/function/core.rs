use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{CallStackFrame, Context, EvalResult, Flow},
        source::Position,
        types::Type,
        value::{
            callable::{BuiltIn, Callable, GlobalFunction, LocalFunction},
            core::Value,
            variable::{Arg, VarRef, Variable},
        },
    },
};

/// Checks that a callable receives exactly as many arguments as it has
/// parameters.
///
/// # Errors
/// Returns `RuntimeError::ArgumentCountMismatch` otherwise.
pub fn check_arity<T>(name: String,
                            params: &[Type],
                            args: &[T],
                            position: Position)
                            -> EvalResult<String> {
    if params.len() == args.len() {
        Ok(name)
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name,
                                                  expected: params.len(),
                                                  found: args.len(),
                                                  position })
    }
}

/// Binds one argument to a parameter.
///
/// A reference argument must have the parameter's shape (same base type, or
/// the same function type). A `mut` parameter also requires the reference
/// to be mutable; an immutable parameter receives a read-only view. The
/// binding is renamed to the parameter name.
///
/// A value argument is coerced into the parameter type.
///
/// # Errors
/// - `RuntimeError::ReferenceTypeMismatch` for a reference of another type.
/// - `RuntimeError::ImmutableReference` for an immutable reference passed to
///   a `mut` parameter.
/// - `RuntimeError::InvalidCast` if a value cannot be coerced.
pub fn bind_argument(param_name: &str,
                     param_ty: &Type,
                     arg: Arg,
                     position: Position)
                     -> EvalResult<Arg> {
    match arg {
        Arg::Reference(var_ref) => {
            let found = var_ref.ty();

            if !param_ty.same_shape(&found) {
                return Err(RuntimeError::ReferenceTypeMismatch { name: param_name.to_string(),
                                                                 expected: param_ty.to_string(),
                                                                 found: found.to_string(),
                                                                 position });
            }

            if param_ty.is_mutable() && !var_ref.mutable {
                return Err(RuntimeError::ImmutableReference { name: var_ref.name,
                                                              position });
            }

            Ok(Arg::Reference(VarRef { variable: var_ref.variable,
                                       name:     param_name.to_string(),
                                       mutable:  param_ty.is_mutable(), }))
        },
        Arg::Value(value) => Ok(Arg::Value(value.cast_to(param_ty, position)?)),
    }
}

impl Context {
    /// Evaluates `(args) -> callee`.
    ///
    /// Arguments are evaluated first, left to right, then the callee.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            args: &[Expr],
                            position: Position)
                            -> EvalResult<Value> {
        let args = self.eval_arguments(args)?;
        let callable = self.eval_callable(callee)?;

        self.call(&callable, args, position)
    }

    /// Evaluates `(args) ->> callee` into a callable with `args` bound to the
    /// front of `callee`'s parameters.
    ///
    /// Identifier arguments are bound by reference, so the closure observes
    /// later changes to the variable.
    pub(crate) fn eval_bind_front(&mut self,
                                  callee: &Expr,
                                  args: &[Expr],
                                  position: Position)
                                  -> EvalResult<Value> {
        let bound = self.eval_arguments(args)?;
        let callable = self.eval_callable(callee)?;

        tracing::debug!(callee = callable.name(), bound = bound.len(), %position, "bind front");
        Ok(Value::Callable(Rc::new(Callable::Local(LocalFunction::new(callable, bound)))))
    }

    /// Evaluates `decorator @ target`: `target` with `decorator` bound as its
    /// first argument.
    pub(crate) fn eval_decorate(&mut self,
                                decorator: &Expr,
                                target: &Expr,
                                position: Position)
                                -> EvalResult<Value> {
        let decorator = self.eval_callable(decorator)?;
        let target = self.eval_callable(target)?;

        tracing::debug!(decorator = decorator.name(),
                        target = target.name(),
                        %position,
                        "decorate");
        let bound = vec![Arg::Value(Value::Callable(decorator))];
        Ok(Value::Callable(Rc::new(Callable::Local(LocalFunction::new(target, bound)))))
    }

    /// Evaluates an expression that must produce a callable.
    pub(crate) fn eval_callable(&mut self, expr: &Expr) -> EvalResult<Rc<Callable>> {
        match self.eval(expr)? {
            Value::Callable(callable) => Ok(callable),
            other => Err(RuntimeError::NotCallable { found:    other.kind_name().to_string(),
                                                     position: expr.position(), }),
        }
    }

    fn eval_arguments(&mut self, args: &[Expr]) -> EvalResult<Vec<Arg>> {
        args.iter().map(|arg| self.eval_argument(arg)).collect()
    }

    /// Evaluates a call argument.
    ///
    /// An identifier naming a variable is passed by reference; everything
    /// else, including an identifier naming a function, is passed by value.
    fn eval_argument(&mut self, expr: &Expr) -> EvalResult<Arg> {
        if let Expr::Identifier { name, .. } = expr
           && let Some(var_ref) = self.resolve_variable(name)
        {
            return Ok(Arg::Reference(var_ref));
        }

        Ok(Arg::Value(self.eval(expr)?))
    }

    /// Calls a callable with already evaluated arguments.
    ///
    /// Bound callables prepend their bound arguments and delegate to the
    /// callable they wrap.
    ///
    /// # Errors
    /// Returns any binding error or any error raised by the callee.
    pub fn call(&mut self,
                callable: &Callable,
                args: Vec<Arg>,
                position: Position)
                -> EvalResult<Value> {
        match callable {
            Callable::Global(global) => self.call_global(global, args, position),
            Callable::Local(local) => {
                let mut all = local.bound.clone();
                all.extend(args);
                self.call(&local.callee, all, position)
            },
            Callable::BuiltIn(builtin) => self.call_builtin(builtin, args, position),
        }
    }

    /// Calls a function defined in the program.
    ///
    /// Pushes a frame holding the bound parameters, runs the body and pops the
    /// frame. The returned value is coerced into the declared return type; a
    /// body that finishes without `ret` yields that type's default value, and a
    /// `void` function always yields `none`.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %global.function.signature.name, args = args.len()))]
    fn call_global(&mut self,
                   global: &GlobalFunction,
                   args: Vec<Arg>,
                   position: Position)
                   -> EvalResult<Value> {
        let function = Rc::clone(&global.function);
        let signature = &function.signature;
        check_arity(signature.name.clone(), &global_params(global), &args, position)?;

        let mut frame = CallStackFrame::default();
        for (param, arg) in signature.params.iter().zip(args) {
            let binding = match bind_argument(&param.name, &param.ty, arg, position)? {
                Arg::Reference(var_ref) => var_ref,
                Arg::Value(value) => {
                    VarRef::direct(Variable::shared(&param.name, param.ty.clone(), value))
                },
            };
            frame.args.push(binding);
        }

        self.push_frame(frame);
        let result = self.exec_block(&function.body);
        self.pop_frame();

        if signature.ret.is_void() {
            result?;
            return Ok(Value::None);
        }

        match result? {
            Flow::Return(value) => value.cast_to(&signature.ret, position),
            Flow::Normal => Value::default_for(&signature.ret, position),
        }
    }

    /// Calls a builtin after checking its arguments against its signature.
    #[tracing::instrument(level = "debug", skip_all, fields(builtin = builtin.name, args = args.len()))]
    fn call_builtin(&mut self,
                    builtin: &BuiltIn,
                    args: Vec<Arg>,
                    position: Position)
                    -> EvalResult<Value> {
        let params = &builtin.signature.params;
        let name = check_arity(builtin.name.to_string(), params, &args, position)?;

        let bound = params.iter()
                          .zip(args)
                          .enumerate()
                          .map(|(index, (ty, arg))| {
                              bind_argument(&format!("{name} argument {}", index + 1),
                                            ty,
                                            arg,
                                            position)
                          })
                          .collect::<EvalResult<Vec<_>>>()?;

        (builtin.function)(&bound, self.output(), position)
    }
}

fn global_params(global: &GlobalFunction) -> Vec<Type> {
    global.function
          .signature
          .params
          .iter()
          .map(|param| param.ty.clone())
          .collect()
}
