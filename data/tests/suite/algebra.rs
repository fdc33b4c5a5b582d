//! Laws of the collection algebra

use nucleus_data::{
    ArrayList, ArrayMap, Filterable, Foldable, LeftFoldable, Mappable, Semigroup, Traversable,
};
use nucleus_types::{Key, Value};
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> ArrayList {
    values.iter().copied().map(Value::from).collect()
}

fn add(n: i64) -> impl Fn(&Value, &Key) -> Value {
    move |value, _| Value::from(value.as_i64().unwrap_or(0) + n)
}

fn times(n: i64) -> impl Fn(&Value, &Key) -> Value {
    move |value, _| Value::from(value.as_i64().unwrap_or(0) * n)
}

#[test]
fn map_fusion() {
    let list = ints(&[1, 2, 3, 4]);
    let (f, g) = (add(1), times(3));
    let twice = list.map(&g).map(&f);
    let fused = list.map(|value, key| f(&g(value, key), key));
    assert_eq!(twice, fused);
}

#[test]
fn map_identity() {
    let map = ArrayMap::new(&Value::map([("a", 1), ("b", 2)])).unwrap();
    assert_eq!(map.map(|value, _| value.clone()), map);
}

#[test]
fn fold_formulas() {
    let list = ints(&[1, 2, 3]);
    let left = list.foldl(|acc: i64, v| acc * 10 + v.as_i64().unwrap(), 0);
    let right = list.foldr(|v, acc: i64| acc * 10 + v.as_i64().unwrap(), 0);
    assert_eq!(left, 123);
    assert_eq!(right, 321);
}

#[test]
fn folds_over_empty_return_initial() {
    let empty = ArrayList::new();
    assert_eq!(empty.foldl(|acc: i64, _| acc + 1, 42), 42);
    assert_eq!(empty.foldr(|_, acc: i64| acc + 1, 42), 42);
}

#[test]
fn filter_keeps_original_keys() {
    let list = ints(&[5, 6, 7, 8]);
    let even = list.filter(|value, _| value.as_i64().is_some_and(|n| n % 2 == 0));
    let keys: Vec<i64> = even.entries().filter_map(|(key, _)| key.as_index()).collect();
    assert_eq!(keys, [1, 3]);
    assert_eq!(even.to_vec(), ints(&[6, 8]).to_vec());
}

#[test]
fn append_is_associative() {
    let (a, b, c) = (ints(&[1]), ints(&[2, 3]), ints(&[4]));
    assert_eq!(a.append(&b).append(&c), a.append(&b.append(&c)));

    let m = |pairs: &[(&str, i64)]| ArrayMap::new(&Value::map(pairs.iter().copied())).unwrap();
    let (x, y, z) = (m(&[("k", 1)]), m(&[("k", 2), ("j", 0)]), m(&[("j", 9)]));
    assert_eq!(x.append(&y).append(&z), x.append(&y.append(&z)));
}

#[test]
fn list_append_example() {
    let joined = ints(&[1, 2]).append(&ints(&[3, 4]));
    assert_eq!(joined.to_vec(), ints(&[1, 2, 3, 4]).to_vec());
}
