//! Check outcomes.
//!
//! A [`CheckResult`] is built fresh by every `check` call and never mutated
//! afterwards. Callers either inspect the violations or convert the result into
//! a [`ValidationFailure`] with [`CheckResult::into_result`].

use std::fmt;

use nucleus_types::{Key, Kind, Value, ViolationLogging, classify};
use serde::Serialize;

use crate::constraint::Constraint;
use crate::error::ValidationFailure;

/// Where a violation occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "at", rename_all = "lowercase")]
pub enum Location {
    /// The checked value as a whole.
    Root,
    /// 1-based argument position.
    Position(usize),
    Key(Key),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => f.write_str("value"),
            Location::Position(position) => write!(f, "argument {position}"),
            Location::Key(Key::Name(name)) => write!(f, "key '{name}'"),
            Location::Key(Key::Index(index)) => write!(f, "key {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ViolationReason {
    /// Present but rejected by its constraint.
    Mismatch { expected: String, actual: Kind },
    /// Required but absent.
    Missing { expected: String },
    /// Present but not declared (strict specs only).
    Unknown { actual: Kind },
}

/// A single mismatch between an expected constraint and an actual value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    location: Location,
    #[serde(flatten)]
    reason: ViolationReason,
}

impl Violation {
    #[must_use]
    pub fn mismatch(location: Location, constraint: &Constraint, value: &Value) -> Self {
        Self {
            location,
            reason: ViolationReason::Mismatch {
                expected: constraint.to_string(),
                actual: classify(value),
            },
        }
    }

    #[must_use]
    pub fn missing(location: Location, constraint: &Constraint) -> Self {
        Self {
            location,
            reason: ViolationReason::Missing {
                expected: constraint.to_string(),
            },
        }
    }

    #[must_use]
    pub fn unknown(location: Location, value: &Value) -> Self {
        Self {
            location,
            reason: ViolationReason::Unknown {
                actual: classify(value),
            },
        }
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn reason(&self) -> &ViolationReason {
        &self.reason
    }

    /// Canonical string of the expected constraint, if one applies.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        match &self.reason {
            ViolationReason::Mismatch { expected, .. } | ViolationReason::Missing { expected } => {
                Some(expected)
            }
            ViolationReason::Unknown { .. } => None,
        }
    }

    /// Kind actually observed, absent for missing keys.
    #[must_use]
    pub fn actual(&self) -> Option<Kind> {
        match &self.reason {
            ViolationReason::Mismatch { actual, .. } | ViolationReason::Unknown { actual } => {
                Some(*actual)
            }
            ViolationReason::Missing { .. } => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ViolationReason::Mismatch { expected, actual } => {
                write!(f, "{}: expected {expected}, got {actual}", self.location)
            }
            ViolationReason::Missing { expected } => {
                write!(f, "{}: missing, expected {expected}", self.location)
            }
            ViolationReason::Unknown { actual } => {
                write!(f, "{}: unexpected ({actual})", self.location)
            }
        }
    }
}

/// Outcome of a check: success, or every violation in the order found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckResult {
    violations: Vec<Violation>,
}

impl CheckResult {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        !self.passed()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Ok` on success, otherwise a failure carrying every violation.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match ValidationFailure::new(self.violations) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    pub(crate) fn report(&self, logging: ViolationLogging, subject: &str) {
        if self.passed() || logging == ViolationLogging::Silent {
            return;
        }
        tracing::debug!(
            subject,
            violations = self.violations.len(),
            first = %self.violations[0],
            "check failed"
        );
    }
}
