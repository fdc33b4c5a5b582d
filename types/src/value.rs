//! Dynamic value model.
//!
//! A [`Value`] is what constraints are checked against and what containers hold.
//! Arrays are insertion-ordered maps (integer or string keys); objects are shared
//! handles to containers that declare their capabilities up front.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};
use serde::Serialize;

use crate::kind::Capability;

// ============================================================================
// Keys
// ============================================================================

/// Array key: integer index or string name.
///
/// String keys are never reinterpreted as integers, even when they look numeric.
/// Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

// ============================================================================
// Arrays
// ============================================================================

/// Insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Equality is order-sensitive: `{a: 1, b: 2}` and `{b: 2, a: 1}` differ.
#[derive(Debug, Clone, Default)]
pub struct Array(IndexMap<Key, Value>);

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Build a list-shaped array keyed `0..n-1`.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        values.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a key, preserving the relative order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> Iter<'_, Key, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> Keys<'_, Key, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> Values<'_, Key, Value> {
        self.0.values()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.0.into_values().collect()
    }

    /// True when the keys are exactly `0..n-1` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.0
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position as i64))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .enumerate()
                .map(|(index, value)| (Key::from(index), value))
                .collect(),
        )
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Callables
// ============================================================================

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value. Equality is identity of the underlying closure.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<CallableFn>,
}

impl Callable {
    pub fn new(func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    pub fn named(
        name: impl Into<String>,
        func: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Callable({name})"),
            None => f.write_str("Callable(<anonymous>)"),
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

// ============================================================================
// Objects
// ============================================================================

/// A container that can live inside a [`Value`].
///
/// Implementors declare a class name and the closed set of capabilities they
/// support. Capability checks consult this declaration, never the concrete type.
pub trait ObjectLike: fmt::Debug + Send + Sync + 'static {
    fn class_name(&self) -> &'static str;

    fn capabilities(&self) -> &'static [Capability];

    /// Entries as an array, for containers that can be converted to a sequence.
    fn to_entries(&self) -> Option<Array> {
        None
    }

    fn lookup(&self, _key: &Key) -> Option<Value> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to an [`ObjectLike`] container.
#[derive(Clone)]
pub struct Object(Arc<dyn ObjectLike>);

impl Object {
    pub fn new(inner: impl ObjectLike) -> Self {
        Self(Arc::new(inner))
    }

    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.0.class_name()
    }

    #[must_use]
    pub fn capabilities(&self) -> &'static [Capability] {
        self.0.capabilities()
    }

    #[must_use]
    pub fn implements(&self, capability: Capability) -> bool {
        self.0.capabilities().contains(&capability)
    }

    #[must_use]
    pub fn to_array(&self) -> Option<Array> {
        self.0.to_entries()
    }

    #[must_use]
    pub fn lookup(&self, key: &Key) -> Option<Value> {
        self.0.lookup(key)
    }

    #[must_use]
    pub fn downcast_ref<T: ObjectLike>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        if self.class_name() != other.class_name() {
            return false;
        }
        match (self.to_array(), other.to_array()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Array),
    Callable(Callable),
    Object(Object),
}

impl Value {
    /// List-shaped array value keyed `0..n-1`.
    pub fn list(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }

    /// Keyed array value in the given order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        Value::Array(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(callable) => Some(callable),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Numbers compare numerically (integers and floats mix), strings lexically,
/// booleans false-before-true. Everything else is incomparable.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_)) => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value.into_iter().collect())
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Callable(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// JSON numbers that fit `i64` become integers, all others floats.
/// Object keys stay string keys.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Array(
                entries
                    .into_iter()
                    .map(|(key, value)| (Key::Name(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}
