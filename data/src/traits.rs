//! Capability traits implemented by the concrete containers.
//!
//! Each trait is a minimal operation set. Folds come for free from
//! [`Traversable`]; `map`, `filter`, and `append` are container-specific because
//! they must return the same concrete container.

use nucleus_types::{Array, Key, Value};

/// Finite, restartable sequence of `(key, value)` pairs.
///
/// Containers are immutable, so iterating twice yields the same sequence.
pub trait Traversable {
    fn entries(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + '_;
}

/// Right fold: `foldr(f, z)` over `[x1, x2, x3]` is `f(x1, f(x2, f(x3, z)))`.
pub trait Foldable: Traversable {
    fn foldr<A>(&self, mut f: impl FnMut(&Value, A) -> A, initial: A) -> A {
        self.entries()
            .rev()
            .fold(initial, |acc, (_, value)| f(value, acc))
    }
}

/// Left fold: `foldl(f, z)` over `[x1, x2, x3]` is `f(f(f(z, x1), x2), x3)`.
pub trait LeftFoldable: Traversable {
    fn foldl<A>(&self, mut f: impl FnMut(A, &Value) -> A, initial: A) -> A {
        self.entries()
            .fold(initial, |acc, (_, value)| f(acc, value))
    }
}

/// `map(f)` holds `f(value, key)` for every entry, keys and order preserved.
pub trait Mappable: Sized {
    fn map(&self, f: impl FnMut(&Value, &Key) -> Value) -> Self;
}

/// `filter(p)` keeps entries where `p(value, key)` holds, keys and order preserved.
pub trait Filterable: Sized {
    fn filter(&self, predicate: impl FnMut(&Value, &Key) -> bool) -> Self;
}

/// Associative combination of two values of the same concrete type.
pub trait Semigroup: Sized {
    fn append(&self, other: &Self) -> Self;
}

pub trait ToArray {
    fn to_array(&self) -> Array;
}
