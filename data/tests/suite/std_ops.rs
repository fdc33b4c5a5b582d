//! Guarded helpers over plain values

use insta::assert_snapshot;
use nucleus_data::std_ops::{append, concat, filter, foldl, foldr, map, maximum};
use nucleus_data::{ArrayList, ArrayMap, DataError};
use nucleus_meditation::CheckError;
use nucleus_types::{Key, Value};
use pretty_assertions::assert_eq;

use crate::common::init_tracing;

#[test]
fn append_type_mismatch_names_both_sides() {
    init_tracing();
    let left = ArrayList::from_values([Value::from(1)]).into_value();
    let right = ArrayMap::empty().into_value();

    let err = append(&left, &right).unwrap_err();
    assert!(err.is_configuration_error());
    assert_snapshot!(err, @"cannot combine ArrayList with ArrayMap: operands must have the same type");
}

#[test]
fn append_lists_example() {
    let left = ArrayList::from_values([Value::from(1), Value::from(2)]).into_value();
    let right = ArrayList::from_values([Value::from(3), Value::from(4)]).into_value();
    let joined = append(&left, &right).unwrap();
    let list = joined.as_object().unwrap().downcast_ref::<ArrayList>().unwrap();
    assert_eq!(list.to_vec(), [1_i64, 2, 3, 4].map(Value::from));
}

#[test]
fn fold_helpers_match_container_folds() {
    let input = Value::list([1, 2, 3]);
    let digit = |v: &Value| v.as_i64().unwrap().to_string();
    let left = foldl(|acc: String, v| acc + &digit(v), String::new(), &input).unwrap();
    let right = foldr(|v, acc: String| acc + &digit(v), String::new(), &input).unwrap();
    assert_eq!(left, "123");
    assert_eq!(right, "321");
}

#[test]
fn guards_reject_scalars_as_validation_errors() {
    init_tracing();
    let err = map(|v, _| v.clone(), &Value::from(7)).unwrap_err();
    assert!(!err.is_configuration_error());
    match err {
        DataError::Check(CheckError::Validation(failure)) => {
            assert_snapshot!(failure, @"validation failed: argument 1: expected Traversable, got integer");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn filter_over_keyed_array_keeps_keys() {
    let input = Value::map([("a", 1), ("b", 2), ("c", 3)]);
    let kept = filter(|_, key| key != &Key::from("b"), &input).unwrap();
    assert_eq!(kept, Value::map([("a", 1), ("c", 3)]));
}

#[test]
fn concat_merges_keyed_arrays_right_biased() {
    let merged = concat(&Value::map([("a", 1), ("b", 2)]), &Value::map([("a", 9)])).unwrap();
    assert_eq!(merged, Value::map([("a", 9), ("b", 2)]));
}

#[test]
fn maximum_of_container() {
    let list = ArrayList::from_values([Value::from(2), Value::from(11), Value::from(5)]);
    assert_eq!(maximum(&list.into_value()).unwrap(), Value::from(11));
}
