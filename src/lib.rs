//! # fnkit
//!
//! Named, composable wrappers for callables and values.
//!
//! ## Overview
//!
//! - **Functions**: `Function0` .. `Function9` with `of`, `apply`, `and_then`
//!   and (for `Function1`) `compose` and `identity`
//! - **Consumers**: `Consumer1` .. `Consumer5`, side-effecting actions that
//!   chain with `and_then`
//! - **Comparators**: `Comparator` with `reversed`, `nulls_first`,
//!   `nulls_last`; `BinaryOperator` for same-type reductions
//! - **Optional**: a present-or-empty container built on the wrappers above
//! - **Tuples**: `Tuple1` .. `Tuple5`
//! - **Utilities**: slice folds and explicit structural equality
//! - **Storage**: a namespaced key/value pass-through
//!
//! Every entry point that requires an argument has a `try_*` form that
//! reports an absent argument as an [`IllegalArgumentError`].
//!
//! ## Feature Flags
//!
//! - `function`: `FunctionN` wrappers and `BinaryOperator`
//! - `consumer`: `ConsumerN` wrappers
//! - `comparator`: `Comparator`
//! - `optional`: `Optional`
//! - `tuple`: `TupleN`
//! - `util`: slice folds and `BaseObject`
//! - `derive`: `#[derive(BaseObject)]`
//! - `storage`: `Storage` and `MemoryStorage`
//! - `serde`: serialization for `Optional` and tuples
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let length = Function1::of(|text: &'static str| text.len());
//! assert_eq!(length.and_then(|n: usize| 2 * n).apply("abc"), 6);
//!
//! let product = fold_left(Some(&[5, 7, 9]), 1, |acc: i32, n: i32| acc * n);
//! assert_eq!(product, 315);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Arity, IllegalArgumentError};

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "consumer")]
    pub use crate::consumer::*;

    #[cfg(feature = "comparator")]
    pub use crate::comparator::*;

    #[cfg(feature = "optional")]
    pub use crate::optional::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;

    #[cfg(feature = "util")]
    pub use crate::util::array::{fold_left, fold_right, is_empty};

    #[cfg(feature = "util")]
    pub use crate::util::{BaseObject, base_object_eq};
}

mod arity;
pub mod error;

pub use arity::Arity;
pub use error::IllegalArgumentError;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "consumer")]
pub mod consumer;

#[cfg(feature = "comparator")]
pub mod comparator;

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "util")]
pub mod util;

#[cfg(feature = "storage")]
pub mod storage;
