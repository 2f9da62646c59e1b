//! Compile-time arity of wrapper and tuple types.

/// Types whose element or argument count is fixed at compile time.
///
/// Implemented by every `FunctionN`, `ConsumerN` and `TupleN` type.
///
/// # Examples
///
/// ```rust
/// use fnkit::Arity;
/// use fnkit::function::Function3;
///
/// let sum = Function3::of(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum.arity(), 3);
/// assert_eq!(Function3::<i32, i32, i32, i32>::ARITY, 3);
/// ```
pub trait Arity {
    /// The number of arguments (or elements) of the type.
    const ARITY: usize;

    /// Returns [`Self::ARITY`].
    #[inline]
    #[must_use]
    fn arity(&self) -> usize {
        Self::ARITY
    }
}
