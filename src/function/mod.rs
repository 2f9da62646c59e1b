//! Named wrappers around callables of fixed arity.
//!
//! This module provides [`Function0`] through [`Function9`]. Each wrapper owns
//! one shared callable and offers:
//!
//! - `of`: wrap a closure or fn item, or return an existing wrapper unchanged
//! - `try_of`: the same, reporting an absent callable as an error
//! - `apply`: invoke the callable
//! - `and_then` / `try_and_then`: post-compose with a [`Function1`]
//! - `ptr_eq`: identity check between wrappers
//!
//! [`Function1`] additionally provides `compose` and `identity`, and
//! [`Function2`] provides `flip` and `curried`. A [`BinaryOperator`] is a
//! [`Function2`] whose operands and result share one type.
//!
//! Arity is enforced by the type system: a closure taking two arguments
//! implements [`IntoFunction2`] and nothing else.
//!
//! # Laws
//!
//! - **Idempotence**: `Function1::of(f.clone()).ptr_eq(&f)`
//! - **Composition order**: `f.and_then(g).apply(x) == g.apply(f.apply(x))`
//! - **Identity**: `Function1::identity().and_then(f).apply(x) == f.apply(x)`
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function1;
//!
//! let length = Function1::of(|text: &'static str| text.len());
//! let doubled = length.and_then(|count: usize| 2 * count);
//! assert_eq!(doubled.apply("abc"), 6);
//! ```

mod macros;

use std::rc::Rc;

use macros::define_function;

use crate::IllegalArgumentError;

define_function!(0;);
define_function!(1; T1 first);
define_function!(2; T1 first, T2 second);
define_function!(3; T1 first, T2 second, T3 third);
define_function!(4; T1 first, T2 second, T3 third, T4 fourth);
define_function!(5; T1 first, T2 second, T3 third, T4 fourth, T5 fifth);
define_function!(6; T1 first, T2 second, T3 third, T4 fourth, T5 fifth, T6 sixth);
define_function!(7; T1 first, T2 second, T3 third, T4 fourth, T5 fifth, T6 sixth, T7 seventh);
define_function!(8; T1 first, T2 second, T3 third, T4 fourth, T5 fifth, T6 sixth, T7 seventh, T8 eighth);
define_function!(9; T1 first, T2 second, T3 third, T4 fourth, T5 fifth, T6 sixth, T7 seventh, T8 eighth, T9 ninth);

/// A [`Function2`] whose operands and result share one type.
///
/// Typical uses are reductions such as `fold_left`.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::BinaryOperator;
///
/// let add: BinaryOperator<i32> = BinaryOperator::of(|a: i32, b: i32| a + b);
/// assert_eq!(add.apply(2, 3), 5);
/// ```
pub type BinaryOperator<T> = Function2<T, T, T>;

/// A [`Function0`] producing values on demand.
pub type Supplier<R> = Function0<R>;

// Callables are shared through `Rc`, so wrappers stay on one thread.
static_assertions::assert_not_impl_any!(Function1<i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(Function2<String, String, String>: Clone, std::fmt::Debug);

// =============================================================================
// Arity-specific operations
// =============================================================================

impl<R: Clone + 'static> Function0<R> {
    /// Returns a supplier that always yields a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function0;
    ///
    /// let answer = Function0::constant(42);
    /// assert_eq!(answer.apply(), 42);
    /// ```
    #[must_use]
    pub fn constant(value: R) -> Self {
        Self::of(move || value.clone())
    }
}

impl<T1: 'static, R: 'static> Function1<T1, R> {
    /// Returns a function that applies `before`, then `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function1;
    ///
    /// let increment = Function1::of(|n: i32| n + 1);
    /// let composed = increment.compose(|n: i32| n * 10);
    /// assert_eq!(composed.apply(4), 41);
    /// ```
    #[must_use]
    pub fn compose<V: 'static>(self, before: impl IntoFunction1<V, T1>) -> Function1<V, R> {
        before.into_function1().and_then(self)
    }

    /// Like [`Function1::compose`], but reports an absent `before` as an error.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalArgumentError`] when `before` is `None`.
    pub fn try_compose<V: 'static, Before>(
        self,
        before: Option<Before>,
    ) -> Result<Function1<V, R>, IllegalArgumentError>
    where
        Before: IntoFunction1<V, T1>,
    {
        crate::error::require(before, "before").map(|before| self.compose(before))
    }

    /// Returns a function that ignores its argument and yields a clone of `value`.
    #[must_use]
    pub fn constant(value: R) -> Self
    where
        R: Clone,
    {
        Self::of(move |_: T1| value.clone())
    }
}

impl<T: 'static> Function1<T, T> {
    /// Returns the function that yields its argument unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function1;
    ///
    /// assert_eq!(Function1::identity().apply("same"), "same");
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::of(|value: T| value)
    }
}

impl<T1: 'static, T2: 'static, R: 'static> Function2<T1, T2, R> {
    /// Returns a function taking the two arguments in swapped order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function2;
    ///
    /// let subtract = Function2::of(|a: i32, b: i32| a - b);
    /// assert_eq!(subtract.flip().apply(1, 10), 9);
    /// ```
    #[must_use]
    pub fn flip(self) -> Function2<T2, T1, R> {
        let mapper = self.mapper;
        Function2::of(move |second: T2, first: T1| mapper(first, second))
    }

    /// Converts into a function that takes its arguments one at a time.
    ///
    /// The first argument is cloned on every application of the returned
    /// inner function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function2;
    ///
    /// let multiply = Function2::of(|a: i32, b: i32| a * b);
    /// let triple = multiply.curried().apply(3);
    /// assert_eq!(triple.apply(5), 15);
    /// ```
    #[must_use]
    pub fn curried(self) -> Function1<T1, Function1<T2, R>>
    where
        T1: Clone,
    {
        let mapper = self.mapper;
        Function1::of(move |first: T1| {
            let mapper = Rc::clone(&mapper);
            Function1::of(move |second: T2| mapper(first.clone(), second))
        })
    }
}
