use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::VariableSignature,
    interpreter::{types::Type, value::core::Value},
};

/// A named, typed storage cell.
///
/// The declared type never changes; only the value does.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Name and declared type.
    pub signature: VariableSignature,
    /// The current value, always of the declared type's kind.
    pub value:     Value,
}

impl Variable {
    /// Creates a variable and wraps it in a shared handle.
    #[must_use]
    pub fn shared(name: impl Into<String>, ty: Type, value: Value) -> VariableHandle {
        Rc::new(RefCell::new(Self { signature: VariableSignature { name: name.into(),
                                                                   ty },
                                    value }))
    }
}

/// Shared ownership of a [`Variable`].
pub type VariableHandle = Rc<RefCell<Variable>>;

/// A view of a variable under a particular name.
///
/// Passing a variable by reference binds it to the callee's parameter name
/// without copying it. `mutable` says whether reassignment through this view
/// is allowed, which may be stricter than the variable's own type.
#[derive(Debug, Clone)]
pub struct VarRef {
    /// The referenced storage.
    pub variable: VariableHandle,
    /// The name the variable is visible under.
    pub name:     String,
    /// Whether the variable may be reassigned through this view.
    pub mutable:  bool,
}

impl VarRef {
    /// A view of `variable` under its declared name and mutability.
    #[must_use]
    pub fn direct(variable: VariableHandle) -> Self {
        let (name, mutable) = {
            let borrowed = variable.borrow();
            (borrowed.signature.name.clone(), borrowed.signature.ty.is_mutable())
        };

        Self { variable,
               name,
               mutable }
    }

    /// The declared type of the referenced variable.
    #[must_use]
    pub fn ty(&self) -> Type {
        self.variable.borrow().signature.ty.clone()
    }

    /// A copy of the referenced variable's current value.
    #[must_use]
    pub fn value(&self) -> Value {
        self.variable.borrow().value.clone()
    }
}

/// An argument on its way into a call.
#[derive(Debug, Clone)]
pub enum Arg {
    /// An identifier argument: the callee shares the caller's variable.
    Reference(VarRef),
    /// Any other expression: the callee gets its own copy.
    Value(Value),
}

impl Arg {
    /// The argument's current value.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Reference(var_ref) => var_ref.value(),
            Self::Value(value) => value.clone(),
        }
    }
}
