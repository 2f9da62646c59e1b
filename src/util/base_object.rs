//! Explicit structural equality.
//!
//! [`BaseObject`] is implemented deliberately by each data type, listing the
//! fields that take part in equality. With the `derive` feature,
//! `#[derive(BaseObject)]` generates the implementation, comparing every
//! field except those marked `#[base_object(skip)]`.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::util::BaseObject;
//!
//! struct Account {
//!     id: u32,
//!     cached_balance: i64,
//! }
//!
//! impl BaseObject for Account {
//!     fn equals(&self, other: &Self) -> bool {
//!         self.id == other.id
//!     }
//! }
//!
//! let stale = Account { id: 1, cached_balance: 10 };
//! let fresh = Account { id: 1, cached_balance: 25 };
//! assert!(stale.equals(&fresh));
//! ```

/// Types with a deliberately chosen structural equality.
pub trait BaseObject {
    /// Returns `true` if `self` and `other` are structurally equal.
    fn equals(&self, other: &Self) -> bool;
}

impl<T: BaseObject> BaseObject for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equals(right))
    }
}

impl<T: BaseObject> BaseObject for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: BaseObject> BaseObject for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        base_object_eq(self.as_ref(), other.as_ref())
    }
}

/// Compares two possibly absent objects.
///
/// Two absent objects are equal; an absent and a present object are not.
#[must_use]
pub fn base_object_eq<T: BaseObject + ?Sized>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.equals(right),
        (None, None) => true,
        _ => false,
    }
}
