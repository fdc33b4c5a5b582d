//! Constraint constructors.
//!
//! ```
//! use nucleus_meditation::factory::{either, integer, maybe, string};
//!
//! let id = maybe(either(string(), integer()));
//! assert_eq!(id.to_string(), "?(string|integer)");
//! ```

use nucleus_types::{Capability, Kind, Value};

use crate::constraint::{Constraint, Predicate};

#[must_use]
pub fn string() -> Constraint {
    Constraint::Primitive(Kind::String)
}

#[must_use]
pub fn integer() -> Constraint {
    Constraint::Primitive(Kind::Integer)
}

#[must_use]
pub fn float() -> Constraint {
    Constraint::Primitive(Kind::Float)
}

#[must_use]
pub fn boolean() -> Constraint {
    Constraint::Primitive(Kind::Boolean)
}

#[must_use]
pub fn array() -> Constraint {
    Constraint::Primitive(Kind::Array)
}

#[must_use]
pub fn object() -> Constraint {
    Constraint::Primitive(Kind::Object)
}

#[must_use]
pub fn callable() -> Constraint {
    Constraint::Primitive(Kind::Callable)
}

#[must_use]
pub fn null() -> Constraint {
    Constraint::Primitive(Kind::Null)
}

#[must_use]
pub fn any() -> Constraint {
    Constraint::Any
}

#[must_use]
pub fn maybe(inner: Constraint) -> Constraint {
    Constraint::Maybe(Box::new(inner))
}

#[must_use]
pub fn either(left: Constraint, right: Constraint) -> Constraint {
    Constraint::Either(Box::new(left), Box::new(right))
}

/// Left-nested union of every alternative: `one_of([a, b, c])` is `(a|b)|c`.
///
/// Returns `None` for an empty list, which would otherwise match nothing.
pub fn one_of(alternatives: impl IntoIterator<Item = Constraint>) -> Option<Constraint> {
    alternatives.into_iter().reduce(either)
}

#[must_use]
pub fn list() -> Constraint {
    Constraint::Capability(Capability::List)
}

#[must_use]
pub fn map() -> Constraint {
    Constraint::Capability(Capability::Map)
}

#[must_use]
pub fn read_map() -> Constraint {
    Constraint::Capability(Capability::ReadMap)
}

#[must_use]
pub fn foldable() -> Constraint {
    Constraint::Capability(Capability::Foldable)
}

#[must_use]
pub fn left_foldable() -> Constraint {
    Constraint::Capability(Capability::LeftFoldable)
}

#[must_use]
pub fn traversable() -> Constraint {
    Constraint::Capability(Capability::Traversable)
}

#[must_use]
pub fn array_of(inner: Constraint) -> Constraint {
    Constraint::ArrayOf(Box::new(inner))
}

pub fn class(name: impl Into<String>) -> Constraint {
    Constraint::Class(name.into())
}

pub fn predicate(
    label: impl Into<String>,
    func: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Constraint {
    Constraint::Custom(Predicate::new(label, func))
}
