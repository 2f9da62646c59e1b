//! Error types shared by the toolkit.
//!
//! Every contract boundary in this crate reports a missing required argument
//! the same way: through an [`IllegalArgumentError`]. These are programmer
//! errors, so no recovery is attempted; callers are expected to propagate
//! them with `?` or treat them as bugs.

use std::fmt;

/// Represents an error when a required argument is absent.
///
/// Returned by the `try_*` constructors and combinators of the wrapper
/// types (for example `Function1::try_of`, `Function1::try_and_then`,
/// `Optional::try_of`) and by `Optional::get` on an empty optional.
///
/// # Examples
///
/// ```rust
/// use fnkit::IllegalArgumentError;
///
/// let error = IllegalArgumentError::absent("mapper");
/// assert_eq!(error.parameter(), "mapper");
/// assert_eq!(
///     format!("{error}"),
///     "illegal argument `mapper`: required argument is absent"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalArgumentError {
    parameter: &'static str,
    message: String,
}

impl IllegalArgumentError {
    /// Creates an error for `parameter` with a custom message.
    #[must_use]
    pub fn new(parameter: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(parameter, %message, "illegal argument rejected");
        Self { parameter, message }
    }

    /// Creates an error reporting that `parameter` was not provided.
    #[must_use]
    pub fn absent(parameter: &'static str) -> Self {
        Self::new(parameter, "required argument is absent")
    }

    /// Returns the name of the offending parameter.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        self.parameter
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IllegalArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "illegal argument `{}`: {}",
            self.parameter, self.message
        )
    }
}

impl std::error::Error for IllegalArgumentError {}

/// Checks that a required argument is present.
///
/// Returns the inner value, or an [`IllegalArgumentError`] naming
/// `parameter` when the argument is `None`.
///
/// # Errors
///
/// Returns [`IllegalArgumentError`] when `argument` is `None`.
///
/// # Examples
///
/// ```rust
/// use fnkit::error::require;
///
/// assert_eq!(require(Some(3), "count"), Ok(3));
/// assert!(require::<i32>(None, "count").is_err());
/// ```
pub fn require<T>(argument: Option<T>, parameter: &'static str) -> Result<T, IllegalArgumentError> {
    argument.ok_or_else(|| IllegalArgumentError::absent(parameter))
}
