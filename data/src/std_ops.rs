//! Guarded helpers over dynamic values.
//!
//! Collaborators that only hold a [`Value`] call these instead of downcasting
//! themselves. Every helper checks its input with [`Arguments`] first, then
//! forwards to the container operation.

use std::slice;
use std::sync::LazyLock;

use nucleus_meditation::Arguments;
use nucleus_meditation::factory::{array, either, foldable, left_foldable, traversable};
use nucleus_types::{Array, Key, Object, TypeHound, Value};

use crate::error::DataError;
use crate::list::ArrayList;
use crate::map::ArrayMap;
use crate::traits::{Filterable, Foldable, LeftFoldable, Mappable, Semigroup};

static LEFT_FOLDABLE_INPUT: LazyLock<Arguments> =
    LazyLock::new(|| Arguments::contain([either(array(), left_foldable())]));

static FOLDABLE_INPUT: LazyLock<Arguments> =
    LazyLock::new(|| Arguments::contain([either(array(), foldable())]));

static TRAVERSABLE_INPUT: LazyLock<Arguments> =
    LazyLock::new(|| Arguments::contain([traversable()]));

fn entries_of(value: &Value) -> Result<Array, DataError> {
    match value {
        Value::Array(array) => Ok(array.clone()),
        Value::Object(object) => object.to_array().ok_or_else(|| DataError::NotSequence {
            found: object.class_name().to_string(),
        }),
        other => Err(DataError::NotSequence {
            found: TypeHound::new(other).type_name().to_string(),
        }),
    }
}

/// Left fold over an array or left-foldable container.
pub fn foldl<A>(
    mut f: impl FnMut(A, &Value) -> A,
    initial: A,
    input: &Value,
) -> Result<A, DataError> {
    LEFT_FOLDABLE_INPUT.enforce(slice::from_ref(input))?;

    if let Some(object) = input.as_object() {
        if let Some(list) = object.downcast_ref::<ArrayList>() {
            return Ok(list.foldl(f, initial));
        }
        if let Some(map) = object.downcast_ref::<ArrayMap>() {
            return Ok(map.foldl(f, initial));
        }
    }
    Ok(entries_of(input)?
        .values()
        .fold(initial, |acc, value| f(acc, value)))
}

/// Right fold over an array or foldable container.
pub fn foldr<A>(
    mut f: impl FnMut(&Value, A) -> A,
    initial: A,
    input: &Value,
) -> Result<A, DataError> {
    FOLDABLE_INPUT.enforce(slice::from_ref(input))?;

    if let Some(object) = input.as_object() {
        if let Some(list) = object.downcast_ref::<ArrayList>() {
            return Ok(list.foldr(f, initial));
        }
        if let Some(map) = object.downcast_ref::<ArrayMap>() {
            return Ok(map.foldr(f, initial));
        }
    }
    Ok(entries_of(input)?
        .values()
        .rev()
        .fold(initial, |acc, value| f(value, acc)))
}

/// Map over any traversable value. Containers map to the same container;
/// everything else maps to an array with the same keys.
pub fn map(mut f: impl FnMut(&Value, &Key) -> Value, input: &Value) -> Result<Value, DataError> {
    TRAVERSABLE_INPUT.enforce(slice::from_ref(input))?;

    if let Some(object) = input.as_object() {
        if let Some(list) = object.downcast_ref::<ArrayList>() {
            return Ok(list.map(f).into_value());
        }
        if let Some(map) = object.downcast_ref::<ArrayMap>() {
            return Ok(map.map(f).into_value());
        }
    }
    Ok(Value::Array(
        entries_of(input)?
            .iter()
            .map(|(key, value)| (key.clone(), f(value, key)))
            .collect(),
    ))
}

/// Filter any traversable value, keeping original keys.
pub fn filter(
    mut predicate: impl FnMut(&Value, &Key) -> bool,
    input: &Value,
) -> Result<Value, DataError> {
    TRAVERSABLE_INPUT.enforce(slice::from_ref(input))?;

    if let Some(object) = input.as_object() {
        if let Some(list) = object.downcast_ref::<ArrayList>() {
            return Ok(list.filter(predicate).into_value());
        }
        if let Some(map) = object.downcast_ref::<ArrayMap>() {
            return Ok(map.filter(predicate).into_value());
        }
    }
    Ok(Value::Array(
        entries_of(input)?
            .into_iter()
            .filter(|(key, value)| predicate(value, key))
            .collect(),
    ))
}

/// Combine two containers of the same concrete type.
pub fn append(left: &Value, right: &Value) -> Result<Value, DataError> {
    ensure_same_type(left, right)?;

    let (Some(left_object), Some(right_object)) = (left.as_object(), right.as_object()) else {
        return Err(not_semigroup(left));
    };
    append_objects(left_object, right_object).ok_or_else(|| not_semigroup(left))
}

fn append_objects(left: &Object, right: &Object) -> Option<Value> {
    if let (Some(a), Some(b)) = (
        left.downcast_ref::<ArrayList>(),
        right.downcast_ref::<ArrayList>(),
    ) {
        return Some(a.append(b).into_value());
    }
    if let (Some(a), Some(b)) = (
        left.downcast_ref::<ArrayMap>(),
        right.downcast_ref::<ArrayMap>(),
    ) {
        return Some(a.append(b).into_value());
    }
    None
}

/// Concatenate two values of the same type.
///
/// Strings join. Arrays merge in order: integer-keyed entries from both sides
/// are kept and renumbered from zero, name-keyed entries form a right-biased
/// union. Containers append.
pub fn concat(left: &Value, right: &Value) -> Result<Value, DataError> {
    ensure_same_type(left, right)?;

    match (left, right) {
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        (Value::Array(a), Value::Array(b)) => Ok(Value::Array(merge_arrays(a, b))),
        (Value::Object(_), Value::Object(_)) => append(left, right),
        _ => Err(not_semigroup(left)),
    }
}

fn merge_arrays(left: &Array, right: &Array) -> Array {
    let mut merged = Array::new();
    let mut next_index = 0_i64;
    for (key, value) in left.iter().chain(right.iter()) {
        match key {
            Key::Index(_) => {
                merged.insert(Key::Index(next_index), value.clone());
                next_index += 1;
            }
            Key::Name(_) => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

pub fn head(input: &Value) -> Result<Value, DataError> {
    TRAVERSABLE_INPUT.enforce(slice::from_ref(input))?;
    ArrayList::of(input)?.head().cloned()
}

pub fn last(input: &Value) -> Result<Value, DataError> {
    TRAVERSABLE_INPUT.enforce(slice::from_ref(input))?;
    ArrayList::of(input)?.last().cloned()
}

pub fn maximum(input: &Value) -> Result<Value, DataError> {
    TRAVERSABLE_INPUT.enforce(slice::from_ref(input))?;
    ArrayList::of(input)?.maximum()
}

fn ensure_same_type(left: &Value, right: &Value) -> Result<(), DataError> {
    if TypeHound::new(left).same_type(right) {
        return Ok(());
    }
    let left_name = TypeHound::new(left).type_name();
    let right_name = TypeHound::new(right).type_name();
    tracing::debug!(
        left = left_name,
        right = right_name,
        "refusing to combine values of different types"
    );
    Err(DataError::TypeMismatch {
        left: left_name.to_string(),
        right: right_name.to_string(),
    })
}

fn not_semigroup(value: &Value) -> DataError {
    DataError::NotSemigroup {
        found: TypeHound::new(value).type_name().to_string(),
    }
}
