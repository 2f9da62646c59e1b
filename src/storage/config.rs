//! Storage configuration.
//!
//! Values come from [`StorageConfig::default`] or, with
//! [`StorageConfig::from_env`], from environment variables.

use std::env;
use std::fmt;

/// Environment variable holding the key prefix.
pub const PREFIX_ENV_VAR: &str = "FNKIT_STORAGE_PREFIX";

/// Terminates every non-empty prefix, so that sibling namespaces such as
/// `user` and `users` never share keys.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is invalid.
    InvalidValue {
        /// The name of the setting.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for [`Storage`](super::Storage).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    prefix: String,
}

impl StorageConfig {
    /// Creates a configuration with the given prefix.
    ///
    /// A non-empty prefix not already ending in [`NAMESPACE_SEPARATOR`] gets
    /// one appended: `"user"` and `"user."` name the same namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the prefix contains whitespace.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let mut prefix = prefix.into();
        if prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                key: PREFIX_ENV_VAR.to_owned(),
                message: format!("prefix {prefix:?} must not contain whitespace"),
            });
        }
        if !prefix.is_empty() && !prefix.ends_with(NAMESPACE_SEPARATOR) {
            prefix.push(NAMESPACE_SEPARATOR);
        }
        Ok(Self { prefix })
    }

    /// Returns the prefix prepended to every key, separator included.
    ///
    /// The empty prefix disables namespacing.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Loads the configuration from the environment.
    ///
    /// A missing variable yields the default (empty) prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the variable is not valid
    /// Unicode or the prefix is rejected by [`StorageConfig::with_prefix`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(PREFIX_ENV_VAR) {
            Ok(prefix) => Self::with_prefix(prefix),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                key: PREFIX_ENV_VAR.to_owned(),
                message: "value is not valid Unicode".to_owned(),
            }),
        }
    }

    pub(crate) fn qualify(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    pub(crate) fn owns(&self, qualified_key: &str) -> bool {
        qualified_key.starts_with(&self.prefix)
    }
}
