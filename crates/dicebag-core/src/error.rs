//! Error types for the dice and selection engine.

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A value is out of range: sides, count, weight, or an item list size.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dice notation string could not be parsed.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// The stable kind of a [`DiceError`], for callers that map errors to
/// localized messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DiceError::InvalidArgument`].
    InvalidArgument,
    /// See [`DiceError::InvalidNotation`].
    InvalidNotation,
    /// See [`DiceError::NotFound`].
    NotFound,
}

impl DiceError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidNotation(_) => ErrorKind::InvalidNotation,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Returns the human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::InvalidNotation(msg) | Self::NotFound(msg) => msg,
        }
    }
}

/// Convenience result type for engine operations.
pub type DiceResult<T> = Result<T, DiceError>;
