//! Folding and emptiness helpers over possibly absent slices.
//!
//! Every helper accepts `Option<&A>` where `A: AsRef<[T]>`, so arrays,
//! vectors and slices can be passed directly and `None` stands for an
//! absent input.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::util::array::{fold_left, is_empty};
//!
//! assert_eq!(fold_left(Some(&[5, 7, 9]), 1, |acc: i32, n: i32| acc * n), 315);
//! assert!(is_empty(None::<&[i32]>));
//! ```

use crate::function::IntoFunction2;

/// Returns `true` for an absent or zero-length input.
///
/// # Examples
///
/// ```rust
/// use fnkit::util::array::is_empty;
///
/// assert!(is_empty(Some(&Vec::<u8>::new())));
/// assert!(!is_empty(Some(&[1])));
/// ```
#[must_use]
pub fn is_empty<T, A>(array: Option<&A>) -> bool
where
    A: AsRef<[T]> + ?Sized,
{
    array.is_none_or(|array| array.as_ref().is_empty())
}

/// Reduces the elements from left to right.
///
/// The accumulator receives the running result first and the element
/// second. Elements are cloned into the accumulator. Returns `initial`
/// unchanged when the input is absent or empty.
#[must_use]
pub fn fold_left<T, R, A>(array: Option<&A>, initial: R, accumulator: impl IntoFunction2<R, T, R>) -> R
where
    T: Clone + 'static,
    R: 'static,
    A: AsRef<[T]> + ?Sized,
{
    let Some(array) = array else {
        return initial;
    };
    let accumulator = accumulator.into_function2();
    array
        .as_ref()
        .iter()
        .fold(initial, |result, element| accumulator.apply(result, element.clone()))
}

/// Reduces the elements from right to left.
///
/// The accumulator receives the element first and the running result
/// second. Returns `initial` unchanged when the input is absent or empty.
///
/// # Examples
///
/// ```rust
/// use fnkit::util::array::fold_right;
///
/// let joined = fold_right(Some(&["a", "b", "c"]), String::new(), |part: &'static str, acc: String| acc + part);
/// assert_eq!(joined, "cba");
/// ```
#[must_use]
pub fn fold_right<T, R, A>(array: Option<&A>, initial: R, accumulator: impl IntoFunction2<T, R, R>) -> R
where
    T: Clone + 'static,
    R: 'static,
    A: AsRef<[T]> + ?Sized,
{
    let Some(array) = array else {
        return initial;
    };
    let accumulator = accumulator.into_function2();
    array
        .as_ref()
        .iter()
        .rev()
        .fold(initial, |result, element| accumulator.apply(element.clone(), result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function2;
    use rstest::rstest;

    #[rstest]
    #[case(None, true)]
    #[case(Some(vec![]), true)]
    #[case(Some(vec![1]), false)]
    fn is_empty_cases(#[case] input: Option<Vec<i32>>, #[case] expected: bool) {
        assert_eq!(is_empty(input.as_ref()), expected);
    }

    #[rstest]
    fn fold_left_multiplies_in_order() {
        assert_eq!(fold_left(Some(&[5, 7, 9]), 1, |acc: i32, n: i32| acc * n), 315);
    }

    #[rstest]
    fn fold_left_returns_initial_for_absent_input() {
        assert_eq!(fold_left(None::<&[i32]>, 42, |acc: i32, n: i32| acc + n), 42);
        assert_eq!(fold_left(Some(&Vec::<i32>::new()), 42, |acc: i32, n: i32| acc + n), 42);
    }

    #[rstest]
    fn fold_left_threads_running_result_first() {
        let digits = vec![1, 2, 3];
        let number = fold_left(Some(&digits), 0, |acc: i32, digit: i32| acc * 10 + digit);
        assert_eq!(number, 123);
    }

    #[rstest]
    fn fold_left_accepts_wrapped_function() {
        let subtract = Function2::of(|acc: i32, n: i32| acc - n);
        assert_eq!(fold_left(Some(&[1, 2, 3][..]), 10, subtract), 4);
    }

    #[rstest]
    fn fold_right_threads_from_the_end() {
        let number = fold_right(Some(&[1, 2, 3]), 0, |digit: i32, acc: i32| acc * 10 + digit);
        assert_eq!(number, 321);
    }
}
