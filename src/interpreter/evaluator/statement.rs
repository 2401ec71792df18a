use std::rc::Rc;

use crate::{
    ast::{Assignment, Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        source::Position,
        types::Type,
        value::{
            core::Value,
            variable::{Variable, VariableHandle},
        },
    },
};

impl Context {
    /// Executes a block in a fresh scope.
    ///
    /// Execution stops at the first statement that returns; the scope is
    /// discarded either way.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` raised by a statement.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<Flow> {
        self.push_scope();
        let result = self.exec_statements(&block.statements);
        self.pop_scope();

        result
    }

    fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised while executing the statement.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Assign(assignment) => {
                self.exec_assignment(assignment)?;
                Ok(Flow::Normal)
            },
            Statement::Call { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::Return { value, .. } => Ok(Flow::Return(self.eval(value)?)),
            Statement::Conditional { condition,
                                     body,
                                     else_branch,
                                     .. } => {
                if self.eval_condition(condition)? {
                    self.exec_block(body)
                } else if let Some(branch) = else_branch {
                    self.exec_statement(branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::Else { body, .. } => self.exec_block(body),
            Statement::While { condition, body, .. } => {
                while self.eval_condition(condition)? {
                    if let Flow::Return(value) = self.exec_block(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::For { iterator,
                             condition,
                             body,
                             on_iter,
                             position, } => {
                self.exec_for(iterator, condition, body, on_iter, *position)
            },
        }
    }

    /// Evaluates a condition and coerces it to `bool`.
    pub(crate) fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        self.eval(condition)?.truthy(condition.position())
    }

    /// Executes a declaration or a reassignment.
    pub(crate) fn exec_assignment(&mut self, assignment: &Assignment) -> EvalResult<()> {
        let value = self.eval(&assignment.value)?;

        match &assignment.declared {
            Some(ty) => {
                self.declare(&assignment.name, ty, value, assignment.position)?;
                Ok(())
            },
            None => self.reassign(&assignment.name, value, assignment.position),
        }
    }

    /// Declares a variable in the innermost scope.
    ///
    /// The value is coerced into the declared type. Names may shadow
    /// variables of enclosing blocks and parameters, but not variables of the
    /// same block.
    ///
    /// # Errors
    /// - `RuntimeError::VoidVariable` if `ty` is `void`.
    /// - `RuntimeError::VariableAlreadyDeclared` if the block already has a
    ///   variable called `name`.
    /// - `RuntimeError::InvalidCast` if the value cannot be coerced into `ty`.
    pub fn declare(&mut self,
                   name: &str,
                   ty: &Type,
                   value: Value,
                   position: Position)
                   -> EvalResult<VariableHandle> {
        if ty.is_void() {
            return Err(RuntimeError::VoidVariable { name: name.to_string(),
                                                    position });
        }

        let taken = self.innermost_scope()
                        .variables
                        .iter()
                        .any(|variable| variable.borrow().signature.name == name);
        if taken {
            return Err(RuntimeError::VariableAlreadyDeclared { name: name.to_string(),
                                                               position });
        }

        let value = value.cast_to(ty, position)?;
        tracing::trace!(name, ty = %ty, value = %value, "declared variable");

        let variable = Variable::shared(name, ty.clone(), value);
        self.innermost_scope().variables.push(Rc::clone(&variable));

        Ok(variable)
    }

    /// Stores a new value in an existing, mutable variable.
    ///
    /// The value is coerced into the variable's declared type.
    ///
    /// # Errors
    /// - `RuntimeError::UndeclaredAssignment` if no variable is visible under
    ///   `name`.
    /// - `RuntimeError::ImmutableAssignment` if it is not mutable through the
    ///   visible binding.
    /// - `RuntimeError::InvalidCast` if the value cannot be coerced.
    pub fn reassign(&mut self, name: &str, value: Value, position: Position) -> EvalResult<()> {
        let Some(var_ref) = self.resolve_variable(name) else {
            return Err(RuntimeError::UndeclaredAssignment { name: name.to_string(),
                                                            position });
        };

        if !var_ref.mutable {
            return Err(RuntimeError::ImmutableAssignment { name: name.to_string(),
                                                           position });
        }

        let value = value.cast_to(&var_ref.ty(), position)?;
        var_ref.variable.borrow_mut().value = value;

        Ok(())
    }
}
