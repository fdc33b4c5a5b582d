//! Constraint tree and its evaluation.

use std::fmt;
use std::sync::Arc;

use nucleus_types::{Capability, Kind, Value, classify};

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// User-supplied boolean test with a label used in diagnostics.
#[derive(Clone)]
pub struct Predicate {
    label: String,
    func: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(
        label: impl Into<String>,
        func: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.func)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.label).finish()
    }
}

/// A composable predicate over a [`Value`].
///
/// Build these with the functions in [`crate::factory`]. The `Display` form is the
/// canonical string used in violations: primitive kinds render their lowercase
/// name, unions render `left|right`, and any side that is itself a union is
/// parenthesized so `(a|b)|c` and `a|(b|c)` stay distinguishable.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Exactly this primary kind. `Kind::Any` matches everything.
    Primitive(Kind),
    Any,
    /// Null, or whatever `inner` accepts.
    Maybe(Box<Constraint>),
    /// Left is tried first; right only when left fails.
    Either(Box<Constraint>, Box<Constraint>),
    /// Structural capability test.
    Capability(Capability),
    /// Traversable value whose every element satisfies `inner`.
    ArrayOf(Box<Constraint>),
    /// Object with this declared class name.
    Class(String),
    Custom(Predicate),
}

impl Constraint {
    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Constraint::Primitive(kind) => *kind == Kind::Any || classify(value) == *kind,
            Constraint::Any => true,
            Constraint::Maybe(inner) => value.is_null() || inner.check(value),
            Constraint::Either(left, right) => left.check(value) || right.check(value),
            Constraint::Capability(capability) => satisfies(value, *capability),
            Constraint::ArrayOf(inner) => match value {
                Value::Array(array) => array.values().all(|item| inner.check(item)),
                Value::Object(object) if object.implements(Capability::Traversable) => object
                    .to_array()
                    .is_some_and(|array| array.values().all(|item| inner.check(item))),
                _ => false,
            },
            Constraint::Class(name) => value
                .as_object()
                .is_some_and(|object| object.class_name() == name),
            Constraint::Custom(predicate) => predicate.test(value),
        }
    }

    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self, Constraint::Either(..))
    }

    /// Render a child, parenthesized when it is a union.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_union() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Capability tests are structural: plain arrays satisfy the shapes they
/// naturally have, objects satisfy what they declare.
fn satisfies(value: &Value, capability: Capability) -> bool {
    match (value, capability) {
        (Value::Array(_), Capability::Traversable | Capability::ReadMap) => true,
        (Value::Array(array), Capability::List) => array.is_list(),
        (Value::Object(object), capability) => object.implements(capability),
        _ => false,
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Primitive(kind) => write!(f, "{kind}"),
            Constraint::Any => f.write_str("any"),
            Constraint::Maybe(inner) => {
                f.write_str("?")?;
                inner.fmt_operand(f)
            }
            Constraint::Either(left, right) => {
                left.fmt_operand(f)?;
                f.write_str("|")?;
                right.fmt_operand(f)
            }
            Constraint::Capability(capability) => write!(f, "{capability}"),
            Constraint::ArrayOf(inner) => {
                inner.fmt_operand(f)?;
                f.write_str("[]")
            }
            Constraint::Class(name) => f.write_str(name),
            Constraint::Custom(predicate) => f.write_str(predicate.label()),
        }
    }
}
