//! Persistent collections for Nucleus.
//!
//! [`ArrayList`] and [`ArrayMap`] implement the capability traits in [`traits`]
//! (traverse, fold, map, filter, append) and live inside a
//! [`Value`](nucleus_types::Value) as objects that declare those capabilities.
//! Every operation returns a new container; existing containers never change.
//!
//! [`std_ops`] offers the same operations over plain values, guarded by
//! argument checks.

mod error;
mod flick;
mod list;
mod map;
pub mod std_ops;
pub mod traits;

pub use error::DataError;
pub use flick::Flick;
pub use list::ArrayList;
pub use map::ArrayMap;
pub use traits::{Filterable, Foldable, LeftFoldable, Mappable, Semigroup, ToArray, Traversable};
