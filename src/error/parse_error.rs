use thiserror::Error;

use crate::interpreter::source::Position;

/// Represents all errors that can occur while parsing.
///
/// Parsing stops at the first error; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token or construct was required but something else was
    /// found.
    #[error("Error at {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// Where the offending token starts.
        position: Position,
    },
    /// An expression was required.
    #[error("Error at {position}: Expected an expression, found {found}.")]
    ExpectedExpression {
        /// The token that was found instead.
        found:    String,
        /// Where the offending token starts.
        position: Position,
    },
    /// A parenthesized list that is neither a call, a bind-front nor a single
    /// grouped expression, such as `(1, 2);` or `();`.
    #[error("Error at {position}: A list of {count} expressions must be followed by '->' or '->>'.")]
    DanglingArgumentList {
        /// How many expressions the list held.
        count:    usize,
        /// Where the list starts.
        position: Position,
    },
    /// A parameter was declared with type `void`.
    #[error("Error at {position}: Parameter '{name}' cannot have type void.")]
    VoidParameter {
        /// The parameter name.
        name:     String,
        /// Where the parameter type starts.
        position: Position,
    },
}

impl ParseError {
    /// The position the error was raised at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedExpression { position, .. }
            | Self::DanglingArgumentList { position, .. }
            | Self::VoidParameter { position, .. } => *position,
        }
    }
}
