use thiserror::Error;

use crate::interpreter::{lexer::tables::MAX_IDENTIFIER_LENGTH, source::Position};

/// Represents the fatal errors the lexer can raise.
///
/// Either of these stops tokenization; no further tokens are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Error at {position}: Unexpected character '{found}'.")]
    UnexpectedToken {
        /// The offending character.
        found:    char,
        /// Where the character was read.
        position: Position,
    },
    /// A string literal ran into a newline or the end of input before its
    /// closing quote.
    #[error("Error at {position}: Unterminated string literal.")]
    UnterminatedString {
        /// Where the string literal starts.
        position: Position,
    },
}

impl LexError {
    /// The position the error was raised at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::UnterminatedString { position } => {
                *position
            },
        }
    }
}

/// Recoverable lexical problems. The token they are attached to is still
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexWarning {
    /// An integer literal does not fit into 64 bits and was clamped.
    #[error("Warning at {position}: Numeric literal is too large and was clamped.")]
    Overflow {
        /// Where the literal starts.
        position: Position,
    },
    /// An identifier was longer than the length cap and was truncated.
    #[error("Warning at {position}: Identifier exceeds {max} characters and was truncated to '{kept}'.",
            max = MAX_IDENTIFIER_LENGTH)]
    LengthExceeded {
        /// The part of the identifier that was kept.
        kept:     String,
        /// Where the identifier starts.
        position: Position,
    },
}

impl LexWarning {
    /// The position the warning was raised at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Overflow { position } | Self::LengthExceeded { position, .. } => *position,
        }
    }
}
