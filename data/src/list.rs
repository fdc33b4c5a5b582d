//! Persistent ordered sequence.

use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use nucleus_meditation::factory::traversable;
use nucleus_types::{Array, Capability, Key, Object, ObjectLike, TypeHound, Value};

use crate::error::DataError;
use crate::traits::{Filterable, Foldable, LeftFoldable, Mappable, Semigroup, ToArray, Traversable};

const CAPABILITIES: &[Capability] = &[
    Capability::Traversable,
    Capability::Foldable,
    Capability::LeftFoldable,
    Capability::List,
];

/// Ordered sequence with integer keys.
///
/// Construction renumbers keys `0..n-1`. [`Filterable::filter`] keeps the
/// surviving entries' original keys, so a filtered list may be sparse; `append`,
/// `tail`, and `init` renumber again. Every operation returns a new list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayList {
    items: Arc<Array>,
}

impl ArrayList {
    pub const CLASS_NAME: &'static str = "ArrayList";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self::with_entries(Array::from_values(values))
    }

    /// Build from any sequence-shaped value: an array (keys discarded), or a
    /// container that converts to one.
    pub fn of(input: &Value) -> Result<Self, DataError> {
        let not_sequence = || DataError::NotSequence {
            found: TypeHound::new(input).type_name().to_string(),
        };
        if !traversable().check(input) {
            return Err(not_sequence());
        }
        let entries = match input {
            Value::Array(array) => array.clone(),
            Value::Object(object) => object.to_array().ok_or_else(not_sequence)?,
            _ => return Err(not_sequence()),
        };
        Ok(Self::from_values(entries.into_values()))
    }

    fn with_entries(items: Array) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element stored under `index`. After a filter this is the original index.
    #[must_use]
    pub fn get(&self, index: i64) -> Option<&Value> {
        self.items.get(&Key::Index(index))
    }

    pub fn head(&self) -> Result<&Value, DataError> {
        self.items
            .values()
            .next()
            .ok_or(DataError::EmptyContainer { operation: "head" })
    }

    pub fn last(&self) -> Result<&Value, DataError> {
        self.items
            .values()
            .next_back()
            .ok_or(DataError::EmptyContainer { operation: "last" })
    }

    /// Everything but the first element.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self::from_values(self.items.values().skip(1).cloned())
    }

    /// Everything but the last element.
    #[must_use]
    pub fn init(&self) -> Self {
        let keep = self.len().saturating_sub(1);
        Self::from_values(self.items.values().take(keep).cloned())
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.items.values().any(|item| item == value)
    }

    /// Largest element. Numbers compare numerically, strings lexically.
    pub fn maximum(&self) -> Result<Value, DataError> {
        let mut items = self.items.values();
        let first = items.next().ok_or(DataError::EmptyContainer {
            operation: "maximum",
        })?;
        let mut best = first;
        for item in items {
            match item.partial_cmp(best) {
                Some(Ordering::Greater) => best = item,
                Some(_) => {}
                None => {
                    return Err(DataError::Incomparable {
                        left: TypeHound::new(best).type_name().to_string(),
                        right: TypeHound::new(item).type_name().to_string(),
                    });
                }
            }
        }
        Ok(best.clone())
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.values().cloned().collect()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(Object::new(self))
    }
}

impl Traversable for ArrayList {
    fn entries(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + '_ {
        self.items.iter()
    }
}

impl Foldable for ArrayList {}

impl LeftFoldable for ArrayList {}

impl Mappable for ArrayList {
    fn map(&self, mut f: impl FnMut(&Value, &Key) -> Value) -> Self {
        Self::with_entries(
            self.items
                .iter()
                .map(|(key, value)| (key.clone(), f(value, key)))
                .collect(),
        )
    }
}

impl Filterable for ArrayList {
    fn filter(&self, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Self {
        Self::with_entries(
            self.items
                .iter()
                .filter(|&(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

/// Concatenation: `self`'s elements, then `other`'s, renumbered.
impl Semigroup for ArrayList {
    fn append(&self, other: &Self) -> Self {
        Self::from_values(self.items.values().chain(other.items.values()).cloned())
    }
}

impl ToArray for ArrayList {
    fn to_array(&self) -> Array {
        Array::clone(&self.items)
    }
}

impl ObjectLike for ArrayList {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn to_entries(&self) -> Option<Array> {
        Some(self.to_array())
    }

    fn lookup(&self, key: &Key) -> Option<Value> {
        self.items.get(key).cloned()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromIterator<Value> for ArrayList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl From<Vec<Value>> for ArrayList {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl From<ArrayList> for Value {
    fn from(list: ArrayList) -> Self {
        list.into_value()
    }
}
