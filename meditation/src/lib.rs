//! Runtime constraint checking for Nucleus.
//!
//! Build a [`Constraint`] tree with the functions in [`factory`], then check
//! call arguments positionally with [`Arguments`] or attribute mappings by key
//! with [`Spec`]. Both produce a [`CheckResult`] that lists every violation:
//! where it happened, what was expected, and what kind was found.
//!
//! ```
//! use nucleus_meditation::Arguments;
//! use nucleus_meditation::factory::{integer, string};
//! use nucleus_types::Value;
//!
//! let args = Arguments::contain([string(), integer()]);
//! let result = args.check(&[Value::from("a"), Value::from("b")]).unwrap();
//! assert_eq!(result.violations()[0].to_string(), "argument 2: expected integer, got string");
//! ```

mod arguments;
mod constraint;
mod error;
pub mod factory;
mod result;
mod spec;

pub use arguments::Arguments;
pub use constraint::{Constraint, Predicate};
pub use error::{ArityMismatch, CheckError, ValidationFailure};
pub use result::{CheckResult, Location, Violation, ViolationReason};
pub use spec::Spec;
