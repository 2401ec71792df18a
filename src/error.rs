use thiserror::Error;

use crate::interpreter::source::Position;

/// Lexical errors and warnings.
///
/// Defines the fatal errors that stop tokenization (an unexpected character,
/// an unterminated string) and the recoverable warnings that are reported next
/// to a still valid token (numeric overflow, overlong identifiers).
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Every parse error carries the position of the offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown identifiers, invalid casts, mutability violations, or unsupported
/// operator and type combinations.
pub mod runtime_error;

pub use lex_error::{LexError, LexWarning};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any fatal error the pipeline can produce.
///
/// Each stage's error converts into this type, so `?` works across stage
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tokenization failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The position the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => e.position(),
        }
    }
}
