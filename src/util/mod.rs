//! Small helpers built on the wrapper types.
//!
//! - [`array`]: `is_empty`, `fold_left` and `fold_right` over possibly absent slices
//! - [`BaseObject`]: explicit structural equality, derivable with the `derive` feature

pub mod array;
mod base_object;

pub use base_object::{BaseObject, base_object_eq};

#[cfg(feature = "derive")]
pub use fnkit_derive::BaseObject;
