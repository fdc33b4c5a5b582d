//! Error types for the checking engine.
//!
//! Two families are kept apart on purpose: an [`ArityMismatch`] is a
//! configuration error (the caller wired the check wrong), a
//! [`ValidationFailure`] means the values themselves were rejected.

use std::fmt;

use thiserror::Error;

use crate::result::Violation;

/// Constraint count and value count differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("argument count mismatch: {expected} constraints, {actual} values")]
pub struct ArityMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// One or more values failed their constraints.
///
/// Invariant: `violations` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// `None` when there is nothing to report.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Arity(#[from] ArityMismatch),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl CheckError {
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, CheckError::Arity(_))
    }
}
