//! Core value model for Nucleus.
//!
//! This crate contains the dynamic [`Value`] representation, the closed set of
//! primary [`Kind`]s, structural [`Capability`] tags, and [`TypeHound`], which maps
//! every value to exactly one kind. Pure types, no IO.

mod hound;
mod kind;
pub mod settings;
mod value;

pub use hound::{TypeHound, classify};
pub use kind::{Capability, Kind};
pub use settings::{MeditationSettings, Strictness, ViolationLogging};
pub use value::{Array, Callable, Key, Object, ObjectLike, Value};
