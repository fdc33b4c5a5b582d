//! Runtime type detection.
//!
//! Classification looks only at a value's intrinsic representation. Nothing is
//! coerced: `"0"` is a string, not an integer, and an empty array is still an array.

use crate::kind::Kind;
use crate::value::Value;

/// Classifies values into their primary [`Kind`].
#[derive(Debug, Clone, Copy)]
pub struct TypeHound<'a> {
    value: &'a Value,
}

impl<'a> TypeHound<'a> {
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Total and deterministic: every value resolves to exactly one kind, never `Any`.
    #[must_use]
    pub const fn resolve(self) -> Kind {
        match self.value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Callable(_) => Kind::Callable,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Kind name, or the declared class name for objects.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self.value {
            Value::Object(object) => object.class_name(),
            other => TypeHound::new(other).resolve().as_str(),
        }
    }

    /// Same kind and, for objects, the same declared class.
    #[must_use]
    pub fn same_type(self, other: &Value) -> bool {
        match (self.value, other) {
            (Value::Object(a), Value::Object(b)) => a.class_name() == b.class_name(),
            (a, b) => TypeHound::new(a).resolve() == TypeHound::new(b).resolve(),
        }
    }
}

/// Shorthand for `TypeHound::new(value).resolve()`.
#[must_use]
pub const fn classify(value: &Value) -> Kind {
    TypeHound::new(value).resolve()
}
