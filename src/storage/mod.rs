//! Namespaced key/value storage.
//!
//! [`Storage`] is a thin pass-through over a [`StorageBackend`]. It adds
//! only key namespacing: every key is prefixed with
//! [`StorageConfig::prefix`] (which ends in [`NAMESPACE_SEPARATOR`]), and [`Storage::clear`] removes only the keys
//! under that prefix. [`MemoryStorage`] is the in-process backend.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::storage::{MemoryStorage, Storage, StorageConfig};
//!
//! let config = StorageConfig::with_prefix("session.").unwrap();
//! let mut storage = Storage::with_config(MemoryStorage::new(), config);
//!
//! storage.set("token", "abc");
//! assert!(storage.exist("token"));
//! assert_eq!(storage.get("token").as_deref(), Some("abc"));
//!
//! storage.delete("token");
//! assert_eq!(storage.get("token"), None);
//! ```

mod backend;
mod config;

pub use backend::{MemoryStorage, StorageBackend};
pub use config::{ConfigError, NAMESPACE_SEPARATOR, PREFIX_ENV_VAR, StorageConfig};

/// A namespaced view over a [`StorageBackend`].
#[derive(Debug, Clone, Default)]
pub struct Storage<B = MemoryStorage> {
    backend: B,
    config: StorageConfig,
}

impl<B: StorageBackend> Storage<B> {
    /// Wraps `backend` without namespacing.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, StorageConfig::default())
    }

    /// Wraps `backend` using `config`.
    #[must_use]
    pub const fn with_config(backend: B, config: StorageConfig) -> Self {
        Self { backend, config }
    }

    /// Removes every key under the configured prefix.
    pub fn clear(&mut self) {
        let owned: Vec<String> = self
            .backend
            .keys()
            .into_iter()
            .filter(|key| self.config.owns(key))
            .collect();
        tracing::trace!(prefix = self.config.prefix(), removed = owned.len(), "storage cleared");
        for key in owned {
            self.backend.remove(&key);
        }
    }

    /// Removes `key`.
    pub fn delete(&mut self, key: &str) {
        tracing::trace!(key, "storage delete");
        self.backend.remove(&self.config.qualify(key));
    }

    /// Returns `true` if `key` is stored.
    #[must_use]
    pub fn exist(&self, key: &str) -> bool {
        let found = self.backend.contains(&self.config.qualify(key));
        tracing::trace!(key, found, "storage exist");
        found
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.backend.get(&self.config.qualify(key));
        tracing::trace!(key, found = value.is_some(), "storage get");
        value
    }

    /// Returns the value stored under `key` as an [`Optional`](crate::optional::Optional).
    #[cfg(feature = "optional")]
    #[must_use]
    pub fn get_optional(&self, key: &str) -> crate::optional::Optional<String> {
        crate::optional::Optional::of_nullable(self.get(key))
    }

    /// Stores `value` under `key`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        tracing::trace!(key, "storage set");
        self.backend.set(&self.config.qualify(key), value.into());
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Returns the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the wrapper and returns the backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
