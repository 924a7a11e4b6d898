//! In-memory key-value store.

use crate::error::StoreResult;
use crate::store::KeyValueStore;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// An ephemeral, insertion-ordered key-value store.
///
/// This store keeps all entries in memory and is used:
/// - As the private fallback inside every [`crate::StorageFacade`]
/// - As the whole facade when no persistent store exists
/// - In tests that need a well-behaved store
///
/// `key(index)` enumerates in insertion order. Overwriting a key keeps its
/// position and removing a key keeps the relative order of the rest.
///
/// The inherent methods never fail; the [`KeyValueStore`] impl wraps them
/// in `Ok`.
///
/// # Example
///
/// ```rust
/// use wrapstore_core::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.set("theme", "dark");
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// assert_eq!(store.key(0).as_deref(), Some("theme"));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<IndexMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`, in iteration order.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Stores `value` under `key`.
    pub fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_owned(), value.to_owned());
    }

    /// Removes `key` if present.
    pub fn remove(&self, key: &str) {
        self.entries.write().shift_remove(key);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the key at insertion position `index`.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<String> {
        self.entries
            .read()
            .get_index(index)
            .map(|(k, _)| k.clone())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns a copy of all entries in insertion order.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(InMemoryStore::get(self, key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        InMemoryStore::set(self, key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        InMemoryStore::remove(self, key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        InMemoryStore::clear(self);
        Ok(())
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        Ok(InMemoryStore::key(self, index))
    }

    fn length(&self) -> StoreResult<usize> {
        Ok(self.len())
    }
}
