use crate::{
    ast::{Block, Expr, ForIterator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        source::Position,
        value::variable::{Arg, VarRef},
    },
};

impl Context {
    /// Executes a `for` loop.
    ///
    /// The iterator is either declared by the loop header or names an existing
    /// variable. Declared iterators live in a scope wrapping the whole loop and
    /// disappear with it.
    ///
    /// The `on_iter` expression is evaluated once, before the first iteration,
    /// and must produce a callable. Each iteration then:
    ///
    /// 1. evaluates `condition` and stops once it is false,
    /// 2. runs `body`,
    /// 3. calls `on_iter` with the iterator passed by reference.
    ///
    /// A `ret` inside the body ends the loop and is propagated.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownIdentifier` if an existing iterator does not
    ///   resolve to a variable.
    /// - `RuntimeError::NotCallable` if `on_iter` is not a callable.
    /// - Anything raised by the condition, the body or the `on_iter` call,
    ///   for instance a reference type mismatch between the iterator and the
    ///   callable's first parameter.
    ///
    /// # Example
    /// ```
    /// use arrowlang::run;
    ///
    /// let source = "int main {
    ///     0 => mut int total;
    ///     for (0 => mut int i; i < 4) { total + i => total; } -> increment;
    ///     ret total;
    /// }";
    /// assert_eq!(run(source).unwrap(), 6);
    /// ```
    pub fn exec_for(&mut self,
                    iterator: &ForIterator,
                    condition: &Expr,
                    body: &Block,
                    on_iter: &Expr,
                    position: Position)
                    -> EvalResult<Flow> {
        self.push_scope();
        let result = self.run_for(iterator, condition, body, on_iter, position);
        self.pop_scope();

        result
    }

    fn run_for(&mut self,
               iterator: &ForIterator,
               condition: &Expr,
               body: &Block,
               on_iter: &Expr,
               position: Position)
               -> EvalResult<Flow> {
        let iterator = self.for_iterator(iterator)?;
        let on_iter = self.eval_callable(on_iter)?;

        let mut iteration = 0_usize;
        while self.eval_condition(condition)? {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }

            self.call(&on_iter, vec![Arg::Reference(iterator.clone())], position)?;
            iteration += 1;
            tracing::trace!(iteration,
                            iterator = %iterator.variable.borrow().value,
                            "for loop iteration");
        }

        Ok(Flow::Normal)
    }

    fn for_iterator(&mut self, iterator: &ForIterator) -> EvalResult<VarRef> {
        let (name, position) = match iterator {
            ForIterator::Assign(assignment) => {
                self.exec_assignment(assignment)?;
                (&assignment.name, assignment.position)
            },
            ForIterator::Existing { name, position } => (name, *position),
        };

        self.resolve_variable(name)
            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.clone(),
                                                             position })
    }
}
