use thiserror::Error;

use crate::interpreter::source::Position;

/// Represents all errors that can occur during evaluation.
///
/// Evaluation stops at the first error. Side effects that already happened,
/// such as text written by `stdout`, are not undone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name that is neither a variable, a parameter nor a function.
    #[error("Error at {position}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The name that could not be resolved.
        name:     String,
        /// Where the name was used.
        position: Position,
    },
    /// Tried to call a value that is not a function.
    #[error("Error at {position}: A value of type {found} is not callable.")]
    NotCallable {
        /// The kind of value that was called.
        found:    String,
        /// Where the call happened.
        position: Position,
    },
    /// A function was called with the wrong number of arguments.
    #[error("Error at {position}: '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The called function.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied, bound ones included.
        found:    usize,
        /// Where the call happened.
        position: Position,
    },
    /// A variable passed by reference does not have the parameter's type.
    #[error("Error at {position}: Type-mismatched reference for parameter '{name}': expected {expected}, found {found}. Did you want to pass by value?")]
    ReferenceTypeMismatch {
        /// The parameter name.
        name:     String,
        /// The parameter type.
        expected: String,
        /// The type of the variable passed.
        found:    String,
        /// Where the call happened.
        position: Position,
    },
    /// An immutable variable was passed by reference to a `mut` parameter.
    #[error("Error at {position}: Cannot pass immutable variable '{name}' to a mutable parameter.")]
    ImmutableReference {
        /// The variable name at the call site.
        name:     String,
        /// Where the call happened.
        position: Position,
    },
    /// Reassigned a variable that was not declared `mut`.
    #[error("Error at {position}: Cannot reassign immutable variable '{name}'.")]
    ImmutableAssignment {
        /// The variable name.
        name:     String,
        /// Where the assignment happened.
        position: Position,
    },
    /// Reassigned a name that is not a variable.
    #[error("Error at {position}: Cannot reassign undeclared variable '{name}'.")]
    UndeclaredAssignment {
        /// The name.
        name:     String,
        /// Where the assignment happened.
        position: Position,
    },
    /// Declared a name twice in the same block.
    #[error("Error at {position}: Variable '{name}' is already declared in this block.")]
    VariableAlreadyDeclared {
        /// The variable name.
        name:     String,
        /// Where the second declaration happened.
        position: Position,
    },
    /// Declared a variable of type `void`.
    #[error("Error at {position}: Variable '{name}' cannot have type void.")]
    VoidVariable {
        /// The variable name.
        name:     String,
        /// Where the declaration happened.
        position: Position,
    },
    /// A value could not be coerced into the required type.
    #[error("Error at {position}: Cannot cast {from} to {to}.")]
    InvalidCast {
        /// The kind of the value.
        from:     String,
        /// The target type.
        to:       String,
        /// Where the cast was needed.
        position: Position,
    },
    /// A binary operator was applied to operand kinds it does not support.
    #[error("Error at {position}: Operator '{op}' is not supported between {left} and {right}.")]
    UnsupportedOperator {
        /// The operator.
        op:       String,
        /// The kind of the left operand.
        left:     String,
        /// The kind of the right operand.
        right:    String,
        /// Where the operation starts.
        position: Position,
    },
    /// A unary operator was applied to a kind it does not support.
    #[error("Error at {position}: Operator '{op}' is not supported for {operand}.")]
    UnsupportedUnaryOperator {
        /// The operator.
        op:       String,
        /// The kind of the operand.
        operand:  String,
        /// Where the operator appears.
        position: Position,
    },
    /// A string was repeated a negative number of times.
    #[error("Error at {position}: Cannot repeat a string {count} times.")]
    NegativeRepeat {
        /// The repeat count.
        count:    i64,
        /// Where the operation starts.
        position: Position,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Error at {position}: Integer overflow.")]
    Overflow {
        /// Where the operation starts.
        position: Position,
    },
    /// Integer division by zero.
    #[error("Error at {position}: Division by zero.")]
    DivisionByZero {
        /// Where the operation starts.
        position: Position,
    },
    /// Two functions share a name.
    #[error("Error at {position}: Function '{name}' is already defined.")]
    FunctionAlreadyDefined {
        /// The function name.
        name:     String,
        /// Where the second definition starts.
        position: Position,
    },
    /// A function reuses the name of a builtin.
    #[error("Error at {position}: Cannot redefine builtin function '{name}'.")]
    BuiltinFunctionRedefinition {
        /// The function name.
        name:     String,
        /// Where the definition starts.
        position: Position,
    },
    /// The program has no `main` function.
    #[error("Error: The program does not define a 'main' function.")]
    MissingMain,
    /// `main` produced something other than an integer.
    #[error("Error at {position}: 'main' must return int, but returned {found}.")]
    InvalidMainResult {
        /// The kind of the returned value.
        found:    String,
        /// Where `main` is defined.
        position: Position,
    },
    /// Writing program output failed.
    #[error("Error at {position}: Failed to write output: {details}")]
    Output {
        /// The underlying I/O error message.
        details:  String,
        /// Where the write was requested.
        position: Position,
    },
}

impl RuntimeError {
    /// The position the error was raised at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownIdentifier { position, .. }
            | Self::NotCallable { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::ReferenceTypeMismatch { position, .. }
            | Self::ImmutableReference { position, .. }
            | Self::ImmutableAssignment { position, .. }
            | Self::UndeclaredAssignment { position, .. }
            | Self::VariableAlreadyDeclared { position, .. }
            | Self::VoidVariable { position, .. }
            | Self::InvalidCast { position, .. }
            | Self::UnsupportedOperator { position, .. }
            | Self::UnsupportedUnaryOperator { position, .. }
            | Self::NegativeRepeat { position, .. }
            | Self::Overflow { position }
            | Self::DivisionByZero { position }
            | Self::FunctionAlreadyDefined { position, .. }
            | Self::BuiltinFunctionRedefinition { position, .. }
            | Self::InvalidMainResult { position, .. }
            | Self::Output { position, .. } => Some(*position),
            Self::MissingMain => None,
        }
    }
}
