//! Primary value kinds and the structural capability tags layered on top of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary runtime classification of a [`Value`](crate::Value).
///
/// Every value maps to exactly one kind. `Any` is never produced by classification;
/// it exists so diagnostics can name the "matches everything" expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Integer,
    Float,
    Boolean,
    Array,
    Object,
    Callable,
    Null,
    Any,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::String,
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::Array,
        Kind::Object,
        Kind::Callable,
        Kind::Null,
        Kind::Any,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Callable => "callable",
            Kind::Null => "null",
            Kind::Any => "any",
        }
    }

    /// Scalars are the kinds whose values carry no nested elements.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Integer | Kind::Float | Kind::Boolean | Kind::Null
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural capability a value may satisfy regardless of its primary kind.
///
/// Containers declare the capabilities they implement; plain arrays satisfy
/// some of them by shape (see `nucleus_meditation::Constraint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Produces a finite, restartable sequence of `(key, value)` pairs.
    Traversable,
    /// Right fold.
    Foldable,
    /// Left fold.
    LeftFoldable,
    /// Ordered random access by integer index.
    List,
    /// Key lookup.
    ReadMap,
    /// Key lookup plus persistent insert/delete.
    Map,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::Traversable => "Traversable",
            Capability::Foldable => "Foldable",
            Capability::LeftFoldable => "LeftFoldable",
            Capability::List => "List",
            Capability::ReadMap => "ReadMap",
            Capability::Map => "Map",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
