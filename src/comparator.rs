//! Ordering functions as first-class values.
//!
//! A [`Comparator`] wraps a callable `(&T, &T) -> Ordering`:
//!
//! - `Less`: the first operand precedes the second
//! - `Greater`: the first operand follows the second
//! - `Equal`: both operands order the same
//!
//! Comparators can be reversed, chained with `then_comparing`, and lifted
//! over `Option<T>` so that absent operands sort first or last.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//!
//! use fnkit::comparator::Comparator;
//!
//! let by_length = Comparator::<&str>::comparing(|word| word.len());
//! let mut words = vec!["ccc", "a", "bb"];
//! by_length.sort(&mut words);
//! assert_eq!(words, vec!["a", "bb", "ccc"]);
//!
//! let absent_first = Comparator::<i32>::natural_order().nulls_first();
//! assert_eq!(absent_first.compare(&None, &Some(5)), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::IllegalArgumentError;
use crate::function::{BinaryOperator, Function2};

/// A shared ordering function over `T`.
pub struct Comparator<T> {
    ordering: Rc<dyn Fn(&T, &T) -> Ordering>,
}

/// Conversion into [`Comparator`].
///
/// Implemented for every `Fn(&T, &T) -> Ordering` and for [`Comparator`]
/// itself, which converts into itself unchanged.
pub trait IntoComparator<T> {
    /// Converts `self` into a [`Comparator`].
    fn into_comparator(self) -> Comparator<T>;
}

impl<Callable, T> IntoComparator<T> for Callable
where
    Callable: Fn(&T, &T) -> Ordering + 'static,
{
    #[inline]
    fn into_comparator(self) -> Comparator<T> {
        Comparator {
            ordering: Rc::new(self),
        }
    }
}

impl<T> IntoComparator<T> for Comparator<T> {
    #[inline]
    fn into_comparator(self) -> Self {
        self
    }
}

impl<T: 'static> Comparator<T> {
    /// Wraps an ordering callable, or returns an existing comparator unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    ///
    /// use fnkit::comparator::Comparator;
    ///
    /// let descending = Comparator::of(|a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub fn of(ordering: impl IntoComparator<T>) -> Self {
        ordering.into_comparator()
    }

    /// Like [`Comparator::of`], but reports an absent callable as an error.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalArgumentError`] when `ordering` is `None`.
    pub fn try_of<Callable>(ordering: Option<Callable>) -> Result<Self, IllegalArgumentError>
    where
        Callable: IntoComparator<T>,
    {
        crate::error::require(ordering, "comparator").map(Self::of)
    }

    /// Orders values by their [`Ord`] implementation.
    #[must_use]
    pub fn natural_order() -> Self
    where
        T: Ord,
    {
        Self::of(|left: &T, right: &T| left.cmp(right))
    }

    /// Orders values by the key extracted from each operand.
    #[must_use]
    pub fn comparing<K: Ord>(key_extractor: impl Fn(&T) -> K + 'static) -> Self {
        Self::of(move |left: &T, right: &T| key_extractor(left).cmp(&key_extractor(right)))
    }

    /// Compares two operands.
    #[inline]
    #[must_use]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.ordering)(left, right)
    }

    /// Returns the comparator imposing the opposite ordering.
    ///
    /// `Equal` results are left untouched.
    #[must_use]
    pub fn reversed(self) -> Self {
        let ordering = self.ordering;
        Self::of(move |left: &T, right: &T| ordering(left, right).reverse())
    }

    /// Returns a comparator that consults `next` when `self` reports `Equal`.
    #[must_use]
    pub fn then_comparing(self, next: impl IntoComparator<T>) -> Self {
        let next = next.into_comparator();
        let ordering = self.ordering;
        Self::of(move |left: &T, right: &T| {
            ordering(left, right).then_with(|| next.compare(left, right))
        })
    }

    /// Lifts the comparator over `Option<T>`, ordering `None` before any value.
    ///
    /// Two `None` operands are `Equal`; two present operands are delegated
    /// to `self`.
    #[must_use]
    pub fn nulls_first(self) -> Comparator<Option<T>> {
        self.nulls_ordered(Ordering::Less)
    }

    /// Lifts the comparator over `Option<T>`, ordering `None` after any value.
    #[must_use]
    pub fn nulls_last(self) -> Comparator<Option<T>> {
        self.nulls_ordered(Ordering::Greater)
    }

    fn nulls_ordered(self, absent_versus_present: Ordering) -> Comparator<Option<T>> {
        Comparator::of(move |left: &Option<T>, right: &Option<T>| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => absent_versus_present,
            (Some(_), None) => absent_versus_present.reverse(),
            (Some(left), Some(right)) => self.compare(left, right),
        })
    }

    /// Returns the lesser operand, or `left` when both order equally.
    #[must_use]
    pub fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.compare(left, right) == Ordering::Greater {
            right
        } else {
            left
        }
    }

    /// Returns the greater operand, or `left` when both order equally.
    #[must_use]
    pub fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.compare(left, right) == Ordering::Less {
            right
        } else {
            left
        }
    }

    /// Sorts `values` in place (stable).
    pub fn sort(&self, values: &mut [T]) {
        values.sort_by(|left, right| self.compare(left, right));
    }

    /// Views the comparator as a [`Function2`] over owned operands.
    #[must_use]
    pub fn as_function(&self) -> Function2<T, T, Ordering> {
        let ordering = Rc::clone(&self.ordering);
        Function2::of(move |left: T, right: T| ordering(&left, &right))
    }
}

impl<T> Comparator<T> {
    /// Returns `true` if both comparators share the same callable.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ordering, &other.ordering)
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            ordering: Rc::clone(&self.ordering),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Comparator")
            .field("ordering", &"<function>")
            .finish()
    }
}

impl<T: 'static> BinaryOperator<T> {
    /// Returns an operator yielding the lesser operand per `comparator`.
    ///
    /// On ties the first operand is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::comparator::Comparator;
    /// use fnkit::function::BinaryOperator;
    ///
    /// let shortest = BinaryOperator::min_by(Comparator::comparing(|word: &String| word.len()));
    /// assert_eq!(shortest.apply("ab".into(), "cd".into()), "ab");
    /// ```
    #[must_use]
    pub fn min_by(comparator: impl IntoComparator<T>) -> Self {
        let comparator = comparator.into_comparator();
        Self::of(move |left: T, right: T| match comparator.compare(&left, &right) {
            Ordering::Greater => right,
            Ordering::Less | Ordering::Equal => left,
        })
    }

    /// Returns an operator yielding the greater operand per `comparator`.
    ///
    /// On ties the first operand is kept.
    #[must_use]
    pub fn max_by(comparator: impl IntoComparator<T>) -> Self {
        let comparator = comparator.into_comparator();
        Self::of(move |left: T, right: T| match comparator.compare(&left, &right) {
            Ordering::Less => right,
            Ordering::Greater | Ordering::Equal => left,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(5), Ordering::Less)]
    #[case(Some(5), None, Ordering::Greater)]
    #[case(None, None, Ordering::Equal)]
    #[case(Some(1), Some(5), Ordering::Less)]
    fn nulls_first_orders_absent_before_present(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Ordering,
    ) {
        let comparator = Comparator::<i32>::natural_order().nulls_first();
        assert_eq!(comparator.compare(&left, &right), expected);
    }

    #[rstest]
    #[case(None, Some(5), Ordering::Greater)]
    #[case(Some(5), None, Ordering::Less)]
    #[case(None, None, Ordering::Equal)]
    #[case(Some(9), Some(5), Ordering::Greater)]
    fn nulls_last_orders_absent_after_present(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Ordering,
    ) {
        let comparator = Comparator::<i32>::natural_order().nulls_last();
        assert_eq!(comparator.compare(&left, &right), expected);
    }

    #[rstest]
    fn reversed_keeps_equal() {
        let reversed = Comparator::<i32>::natural_order().reversed();
        assert_eq!(reversed.compare(&3, &3), Ordering::Equal);
        assert_eq!(reversed.compare(&1, &3), Ordering::Greater);
    }

    #[rstest]
    fn then_comparing_breaks_ties() {
        let by_length_then_text = Comparator::comparing(|word: &String| word.len())
            .then_comparing(Comparator::<String>::natural_order());
        let mut words: Vec<String> = ["bb", "c", "aa"].iter().map(|s| (*s).to_string()).collect();
        by_length_then_text.sort(&mut words);
        assert_eq!(words, vec!["c", "aa", "bb"]);
    }

    #[rstest]
    fn of_returns_existing_comparator() {
        let comparator = Comparator::<u8>::natural_order();
        assert!(Comparator::of(comparator.clone()).ptr_eq(&comparator));
    }

    #[rstest]
    fn try_of_rejects_absent_comparator() {
        let result = Comparator::<i32>::try_of(None::<fn(&i32, &i32) -> Ordering>);
        assert_eq!(result.unwrap_err().parameter(), "comparator");
    }

    #[rstest]
    fn min_and_max_keep_first_on_tie() {
        let by_parity = Comparator::comparing(|n: &i32| n % 2);
        assert_eq!(*by_parity.min(&2, &4), 2);
        assert_eq!(*by_parity.max(&2, &4), 2);
        assert_eq!(*by_parity.max(&2, &3), 3);
    }

    #[rstest]
    fn binary_operator_max_by() {
        let largest = BinaryOperator::max_by(Comparator::<i32>::natural_order());
        assert_eq!(largest.apply(3, 8), 8);
        assert_eq!(largest.apply(8, 3), 8);
    }

    #[rstest]
    fn as_function_compares_owned_values() {
        let compare = Comparator::<String>::natural_order().as_function();
        assert_eq!(compare.apply("a".into(), "b".into()), Ordering::Less);
    }
}
