//! A container that may or may not hold a value.
//!
//! [`Optional`] is a present-or-empty container built on the toolkit's
//! wrapper types: suppliers are [`Function0`]s, actions are [`Consumer1`]s and
//! mappers are [`Function1`]s. Every operation returns a new instance; an
//! `Optional` never changes state after construction.
//!
//! It converts freely to and from [`Option`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::optional::Optional;
//!
//! let present = Optional::of(5);
//! assert_eq!(present.get(), Ok(&5));
//!
//! let empty: Optional<i32> = Optional::of_nullable(None);
//! assert!(!empty.is_present());
//! assert_eq!(empty.get_or_else_get(|| 7), 7);
//! ```

use crate::IllegalArgumentError;
use crate::consumer::IntoConsumer1;
use crate::function::{IntoFunction0, IntoFunction1};

/// A present-or-empty container.
///
/// Equality compares presence first, then the values through their own
/// [`PartialEq`]. Two empty optionals are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Creates a present optional.
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a present optional, reporting a missing value as an error.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalArgumentError`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::optional::Optional;
    ///
    /// assert!(Optional::try_of(Some(1)).is_ok());
    /// assert!(Optional::<i32>::try_of(None).is_err());
    /// ```
    pub fn try_of(value: Option<T>) -> Result<Self, IllegalArgumentError> {
        crate::error::require(value, "value").map(Self::of)
    }

    /// Creates an optional that is present iff `value` is `Some`.
    #[inline]
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Creates an empty optional.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalArgumentError`] when the optional is empty.
    pub fn get(&self) -> Result<&T, IllegalArgumentError> {
        self.value
            .as_ref()
            .ok_or_else(|| IllegalArgumentError::new("value", "no value present"))
    }

    /// Consumes the optional and returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalArgumentError`] when the optional is empty.
    pub fn into_value(self) -> Result<T, IllegalArgumentError> {
        self.value
            .ok_or_else(|| IllegalArgumentError::new("value", "no value present"))
    }

    /// Returns the value, or `other` when empty.
    #[inline]
    #[must_use]
    pub fn get_or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns `self` when present, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        if self.is_present() { self } else { other }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Compares with a possibly absent optional.
    ///
    /// An absent `other` is never equal; otherwise this is `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::optional::Optional;
    ///
    /// let empty = Optional::<i32>::empty();
    /// assert!(empty.equals(Some(&Optional::empty())));
    /// assert!(!empty.equals(None));
    /// assert!(!Optional::of(1).equals(Some(&empty)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        other.is_some_and(|other| self == other)
    }

    /// Borrows the value as an [`Option`].
    #[inline]
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts into an [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: 'static> Optional<T> {
    /// Returns the value, or the supplier's result when empty.
    ///
    /// The supplier runs only when the optional is empty.
    #[must_use]
    pub fn get_or_else_get(self, supplier: impl IntoFunction0<T>) -> T {
        match self.value {
            Some(value) => value,
            None => supplier.into_function0().apply(),
        }
    }

    /// Runs `consumer` with the value if present.
    pub fn if_present(&self, consumer: impl IntoConsumer1<T>) {
        if let Some(value) = &self.value {
            consumer.into_consumer1().apply(value);
        }
    }

    /// Runs `consumer` with the value if present, otherwise runs `fallback`.
    pub fn if_present_or_else(&self, consumer: impl IntoConsumer1<T>, fallback: impl IntoFunction0<()>) {
        match &self.value {
            Some(value) => consumer.into_consumer1().apply(value),
            None => fallback.into_function0().apply(),
        }
    }

    /// Transforms the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::optional::Optional;
    ///
    /// let length = Optional::of("four").map(|text: &'static str| text.len());
    /// assert_eq!(length, Optional::of(4));
    /// ```
    #[must_use]
    pub fn map<U: 'static>(self, mapper: impl IntoFunction1<T, U>) -> Optional<U> {
        Optional {
            value: self.value.map(|value| mapper.into_function1().apply(value)),
        }
    }

    /// Transforms the value into another optional if present.
    #[must_use]
    pub fn flat_map<U: 'static>(self, mapper: impl IntoFunction1<T, Optional<U>>) -> Optional<U> {
        match self.value {
            Some(value) => mapper.into_function1().apply(value),
            None => Optional::empty(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn get_returns_wrapped_value() {
        let text = String::from("value");
        assert_eq!(Optional::of(text.clone()).get(), Ok(&text));
    }

    #[rstest]
    fn get_on_empty_fails() {
        let error = Optional::<i32>::empty().get().unwrap_err();
        assert_eq!(error.message(), "no value present");
    }

    #[rstest]
    fn try_of_rejects_none() {
        assert_eq!(
            Optional::<i32>::try_of(None),
            Err(IllegalArgumentError::absent("value"))
        );
    }

    #[rstest]
    fn supplier_is_not_evaluated_when_present() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let value = Optional::of(1).get_or_else_get(move || {
            counter.set(counter.get() + 1);
            2
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::of(3), 3)]
    #[case(Optional::empty(), 0)]
    fn if_present_runs_only_when_present(#[case] optional: Optional<i32>, #[case] expected: i32) {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        optional.if_present(move |value: &i32| sink.set(*value));
        assert_eq!(seen.get(), expected);
    }

    #[rstest]
    fn if_present_or_else_runs_fallback_when_empty() {
        let fallback_ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fallback_ran);
        Optional::<i32>::empty().if_present_or_else(|_: &i32| {}, move || flag.set(true));
        assert!(fallback_ran.get());
    }

    #[rstest]
    fn or_else_prefers_present_self() {
        assert_eq!(Optional::of(1).or_else(Optional::of(2)), Optional::of(1));
        assert_eq!(Optional::empty().or_else(Optional::of(2)), Optional::of(2));
    }

    #[rstest]
    fn flat_map_and_filter() {
        let halved = Optional::of(8).flat_map(|n: i32| {
            if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() }
        });
        assert_eq!(halved, Optional::of(4));
        assert!(halved.filter(|n| *n > 10).is_empty());
    }

    #[rstest]
    fn converts_to_and_from_option() {
        let optional: Optional<i32> = Some(4).into();
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(4));
        assert_eq!(Optional::<i32>::default(), Optional::empty());
    }
}
