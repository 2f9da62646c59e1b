//! Storage backends.

use std::collections::BTreeMap;

/// A string key/value store that [`Storage`](super::Storage) delegates to.
///
/// Implementations perform no namespacing of their own.
pub trait StorageBackend {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);

    /// Returns `true` if `key` is stored.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns every stored key.
    fn keys(&self) -> Vec<String>;
}

/// An in-process backend keeping entries in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MemoryStorage {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}
