//! Containers as dynamic values

use nucleus_data::{ArrayList, ArrayMap, DataError, Flick, LeftFoldable, Semigroup};
use nucleus_meditation::Arguments;
use nucleus_meditation::factory::{array_of, class, foldable, integer, list, map, read_map};
use nucleus_types::{Key, Value};
use pretty_assertions::assert_eq;

use crate::common::{attributes, init_tracing};

#[test]
fn containers_satisfy_capability_constraints() {
    let numbers = ArrayList::from_values([Value::from(1), Value::from(2)]).into_value();
    let table = ArrayMap::new(&Value::map([("a", 1)])).unwrap().into_value();

    assert!(list().check(&numbers));
    assert!(foldable().check(&numbers));
    assert!(!map().check(&numbers));
    assert!(map().check(&table));
    assert!(read_map().check(&table));
    assert!(!list().check(&table));
}

#[test]
fn class_and_element_constraints_see_containers() {
    let numbers = ArrayList::from_values([Value::from(1), Value::from(2)]).into_value();
    assert!(class(ArrayList::CLASS_NAME).check(&numbers));
    assert!(!class(ArrayMap::CLASS_NAME).check(&numbers));
    assert!(array_of(integer()).check(&numbers));
}

#[test]
fn arguments_check_container_positions() {
    init_tracing();
    let args = Arguments::contain([list(), map()]);
    let result = args
        .check(&[ArrayList::new().into_value(), ArrayList::new().into_value()])
        .unwrap();
    assert_eq!(result.violations().len(), 1);
    assert_eq!(
        result.violations()[0].to_string(),
        "argument 2: expected Map, got object"
    );
}

#[test]
fn originals_survive_every_operation() {
    let base = ArrayMap::from_array(attributes(serde_json::json!({ "a": 1, "b": 2 })));
    let other = ArrayMap::new(&Value::map([("b", 3)])).unwrap();

    let _ = base.insert("c", 4);
    let _ = base.delete(&Key::from("a"));
    let merged = base.append(&other);

    assert_eq!(base.len(), 2);
    assert_eq!(base.get(&Key::from("b")), Some(&Value::from(2)));
    assert_eq!(merged.get(&Key::from("b")), Some(&Value::from(3)));
}

#[test]
fn map_round_trips_through_value() {
    let original = ArrayMap::new(&Value::map([("x", 1), ("y", 2)])).unwrap();
    let rebuilt = ArrayMap::new(&original.clone().into_value()).unwrap();
    assert_eq!(rebuilt, original);
}

#[test]
fn flick_dispatches_or_reports_key() {
    init_tracing();
    let flick = Flick::new()
        .on("list", |_| ArrayList::new().into_value())
        .on("map", |_| ArrayMap::empty().into_value());

    let built = flick.go("map").unwrap();
    assert!(map().check(&built));

    let err = flick.go("set").unwrap_err();
    assert_eq!(err, DataError::UnknownKey { key: "set".into() });
    assert_eq!(err.to_string(), "no handler for key 'set' and no default handler");
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn containers_are_shareable_across_threads() {
    assert_send_sync::<ArrayList>();
    assert_send_sync::<ArrayMap>();
    assert_send_sync::<Arguments>();
    assert_send_sync::<Value>();

    let numbers = ArrayList::from_values((1_i64..=100).map(Value::from));
    let args = Arguments::contain([list()]);
    let shared = numbers.clone().into_value();

    let sums: Vec<i64> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    assert!(args.check(std::slice::from_ref(&shared)).unwrap().passed());
                    numbers.foldl(|acc, v| acc + v.as_i64().unwrap(), 0)
                })
            })
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    assert_eq!(sums, [5050; 4]);
    assert_eq!(numbers.len(), 100);
}
