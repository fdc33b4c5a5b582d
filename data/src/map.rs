//! Persistent key-to-value map.

use std::any::Any;
use std::sync::Arc;

use nucleus_meditation::factory::{either, read_map, traversable};
use nucleus_types::{Array, Capability, Key, Object, ObjectLike, TypeHound, Value};

use crate::error::DataError;
use crate::list::ArrayList;
use crate::traits::{Filterable, Foldable, LeftFoldable, Mappable, Semigroup, ToArray, Traversable};

const CAPABILITIES: &[Capability] = &[
    Capability::Traversable,
    Capability::Foldable,
    Capability::LeftFoldable,
    Capability::ReadMap,
    Capability::Map,
];

/// Insertion-ordered map with unique keys.
///
/// `insert` and `delete` return a new map. [`Semigroup::append`] is a
/// right-biased union: on a key collision the other map's value wins, and the
/// key keeps the position it had in `self`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayMap {
    entries: Arc<Array>,
}

impl ArrayMap {
    pub const CLASS_NAME: &'static str = "ArrayMap";

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from any key-mapping value: an array (keys kept), or a container
    /// exposing its entries.
    pub fn new(initial: &Value) -> Result<Self, DataError> {
        let not_mapping = || DataError::NotMapping {
            found: TypeHound::new(initial).type_name().to_string(),
        };
        if !either(read_map(), traversable()).check(initial) {
            return Err(not_mapping());
        }
        match initial {
            Value::Array(array) => Ok(Self::from_array(array.clone())),
            Value::Object(object) => object
                .to_array()
                .map(Self::from_array)
                .ok_or_else(not_mapping),
            _ => Err(not_mapping()),
        }
    }

    #[must_use]
    pub fn from_array(entries: Array) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn lookup(&self, key: &Key) -> Result<&Value, DataError> {
        self.entries.get(key).ok_or_else(|| DataError::MissingKey {
            key: key.to_string(),
        })
    }

    #[must_use]
    pub fn member(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// New map with `key` set. An existing key keeps its position.
    #[must_use]
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let mut entries = self.to_array();
        entries.insert(key, value);
        Self::from_array(entries)
    }

    /// New map without `key`; unchanged contents when it is absent.
    #[must_use]
    pub fn delete(&self, key: &Key) -> Self {
        if !self.member(key) {
            return self.clone();
        }
        let mut entries = self.to_array();
        entries.remove(key);
        Self::from_array(entries)
    }

    #[must_use]
    pub fn keys(&self) -> ArrayList {
        self.entries
            .keys()
            .map(|key| match key {
                Key::Index(index) => Value::Integer(*index),
                Key::Name(name) => Value::String(name.clone()),
            })
            .collect()
    }

    #[must_use]
    pub fn values(&self) -> ArrayList {
        self.entries.values().cloned().collect()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(Object::new(self))
    }
}

impl Traversable for ArrayMap {
    fn entries(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + '_ {
        self.entries.iter()
    }
}

impl Foldable for ArrayMap {}

impl LeftFoldable for ArrayMap {}

impl Mappable for ArrayMap {
    fn map(&self, mut f: impl FnMut(&Value, &Key) -> Value) -> Self {
        Self::from_array(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value, key)))
                .collect(),
        )
    }
}

impl Filterable for ArrayMap {
    fn filter(&self, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Self {
        Self::from_array(
            self.entries
                .iter()
                .filter(|&(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl Semigroup for ArrayMap {
    fn append(&self, other: &Self) -> Self {
        let mut merged = self.to_array();
        for (key, value) in other.entries() {
            merged.insert(key.clone(), value.clone());
        }
        Self::from_array(merged)
    }
}

impl ToArray for ArrayMap {
    fn to_array(&self) -> Array {
        Array::clone(&self.entries)
    }
}

impl ObjectLike for ArrayMap {
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
        self.entries.get(key).cloned()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Array> for ArrayMap {
    fn from(entries: Array) -> Self {
        Self::from_array(entries)
    }
}

impl From<ArrayMap> for Value {
    fn from(map: ArrayMap) -> Self {
        map.into_value()
    }
}
