use nucleus_meditation::CheckError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("cannot combine {left} with {right}: operands must have the same type")]
    TypeMismatch { left: String, right: String },
    #[error("{found} does not support append")]
    NotSemigroup { found: String },
    #[error("expected a sequence, got {found}")]
    NotSequence { found: String },
    #[error("expected a key-value mapping, got {found}")]
    NotMapping { found: String },
    #[error("{operation} requires a non-empty container")]
    EmptyContainer { operation: &'static str },
    #[error("no handler for key '{key}' and no default handler")]
    UnknownKey { key: String },
    #[error("key '{key}' not found")]
    MissingKey { key: String },
    #[error("cannot compare {left} with {right}")]
    Incomparable { left: String, right: String },
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl DataError {
    /// Programmer errors: mismatched operand types or a mis-wired argument check.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            DataError::TypeMismatch { .. } => true,
            DataError::Check(err) => err.is_configuration_error(),
            _ => false,
        }
    }
}
