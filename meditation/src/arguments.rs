//! Positional checking of call arguments.

use std::fmt;

use nucleus_types::{Value, ViolationLogging};

use crate::constraint::Constraint;
use crate::error::{ArityMismatch, CheckError};
use crate::result::{CheckResult, Location, Violation};

/// Immutable ordered list of constraints checked against a call's arguments.
///
/// Checking is fail-slow: every position is tested and every violation is
/// reported, so a caller never has to guess which argument was wrong.
#[derive(Debug, Clone)]
pub struct Arguments {
    constraints: Vec<Constraint>,
    logging: ViolationLogging,
}

impl Arguments {
    pub fn contain(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self {
            constraints: constraints.into_iter().collect(),
            logging: ViolationLogging::default(),
        }
    }

    #[must_use]
    pub fn with_logging(mut self, logging: ViolationLogging) -> Self {
        self.logging = logging;
        self
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check `values` position by position.
    ///
    /// A count mismatch is returned as `Err`, never folded into the violations.
    pub fn check(&self, values: &[Value]) -> Result<CheckResult, ArityMismatch> {
        if values.len() != self.constraints.len() {
            return Err(ArityMismatch {
                expected: self.constraints.len(),
                actual: values.len(),
            });
        }

        let violations = self
            .constraints
            .iter()
            .zip(values)
            .enumerate()
            .filter(|(_, (constraint, value))| !constraint.check(value))
            .map(|(index, (constraint, value))| {
                Violation::mismatch(Location::Position(index + 1), constraint, value)
            })
            .collect();

        let result = CheckResult::from_violations(violations);
        result.report(self.logging, "arguments");
        Ok(result)
    }

    /// Check and convert any failure into an error.
    pub fn enforce(&self, values: &[Value]) -> Result<(), CheckError> {
        self.check(values)?.into_result()?;
        Ok(())
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{constraint}")?;
        }
        f.write_str(")")
    }
}
