//! Constraint composition and rendering

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nucleus_meditation::Constraint;
use nucleus_meditation::factory::{
    any, array, array_of, boolean, either, float, integer, maybe, null, one_of, predicate,
    string, traversable,
};
use nucleus_types::{Kind, Value};
use pretty_assertions::assert_eq;

#[test]
fn either_matches_if_either_side_matches() {
    let number = either(integer(), float());
    assert!(number.check(&Value::from(1)));
    assert!(number.check(&Value::from(1.5)));
    assert!(!number.check(&Value::from("1")));
}

#[test]
fn either_skips_right_when_left_matches() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let union = either(
        string(),
        predicate("counted", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }),
    );

    assert!(union.check(&Value::from("hit")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(union.check(&Value::from(5)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn maybe_accepts_null_or_inner() {
    let optional = maybe(string());
    assert!(optional.check(&Value::Null));
    assert!(optional.check(&Value::from("x")));
    assert!(!optional.check(&Value::from(0)));
}

#[test]
fn any_accepts_everything() {
    for value in [Value::Null, Value::from(1), Value::list([1, 2])] {
        assert!(any().check(&value));
        assert!(Constraint::Primitive(Kind::Any).check(&value));
    }
}

#[test]
fn null_constraint_rejects_falsy_values() {
    assert!(null().check(&Value::Null));
    assert!(!null().check(&Value::from(false)));
    assert!(!null().check(&Value::from("")));
}

#[test]
fn array_of_checks_every_element() {
    let ints = array_of(integer());
    assert!(ints.check(&Value::list([1, 2, 3])));
    assert!(ints.check(&Value::list(Vec::<i64>::new())));
    assert!(!ints.check(&Value::list([Value::from(1), Value::from("2")])));
    assert!(!ints.check(&Value::from(1)));
}

#[test]
fn rendering() {
    assert_eq!(boolean().to_string(), "boolean");
    assert_eq!(either(string(), integer()).to_string(), "string|integer");
    assert_eq!(
        either(either(string(), integer()), float()).to_string(),
        "(string|integer)|float"
    );
    assert_eq!(
        either(string(), either(integer(), float())).to_string(),
        "string|(integer|float)"
    );
    assert_eq!(maybe(either(string(), null())).to_string(), "?(string|null)");
    assert_eq!(array_of(either(string(), integer())).to_string(), "(string|integer)[]");
    assert_eq!(either(array(), traversable()).to_string(), "array|Traversable");
}

#[test]
fn one_of_folds_left() {
    let union = one_of([string(), integer(), float()]).unwrap();
    assert!(union.is_union());
    assert_eq!(union.to_string(), "(string|integer)|float");
    assert!(one_of(Vec::new()).is_none());
}
