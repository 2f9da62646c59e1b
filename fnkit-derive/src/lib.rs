//! Derive macros for fnkit.
//!
//! # Available Derive Macros
//!
//! - [`BaseObject`]: Generates structural equality over a struct's fields
//!
//! # Example
//!
//! ```rust,ignore
//! use fnkit::util::BaseObject;
//!
//! #[derive(BaseObject)]
//! struct Session {
//!     user: String,
//!     #[base_object(skip)]
//!     last_seen: u64,
//! }
//!
//! let morning = Session { user: "ada".into(), last_seen: 9 };
//! let evening = Session { user: "ada".into(), last_seen: 21 };
//! assert!(morning.equals(&evening));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod base_object;

use proc_macro::TokenStream;

/// Derive macro implementing `fnkit::util::BaseObject` for a struct.
///
/// Every field is compared with `==` in declaration order. Fields marked
/// `#[base_object(skip)]` take no part in equality. Each compared field's
/// type must implement [`PartialEq`]; the generated impl carries those
/// bounds, so generic structs work without extra annotations.
///
/// # Requirements
///
/// - Only structs are supported (named, tuple, or unit)
/// - Unit structs and structs whose fields are all skipped are always equal
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::fnkit::util::BaseObject for StructName {
///     fn equals(&self, other: &Self) -> bool {
///         true && self.first == other.first && self.second == other.second
///     }
/// }
/// ```
#[proc_macro_derive(BaseObject, attributes(base_object))]
pub fn derive_base_object(input: TokenStream) -> TokenStream {
    base_object::derive_base_object_impl(input)
}
