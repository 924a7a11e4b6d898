//! Key-value store trait definition.

use crate::error::StoreResult;

/// The key-value contract every backend satisfies.
///
/// Stores are **shared handles**: every method takes `&self` and
/// implementors use interior mutability, the same way a host-provided
/// storage object can be reached from several places at once.
///
/// # Invariants
///
/// - `set` inserts or overwrites; `get` afterwards returns the value
/// - `remove` of an absent key is a no-op
/// - `key(i)` is `Some` exactly for `i < length()`
/// - Enumeration order is backend-defined and may change across mutations
///
/// # Implementors
///
/// - [`crate::InMemoryStore`] - Ephemeral, insertion-ordered
/// - [`crate::FileStore`] - Persistent JSON document with optional quota
/// - [`crate::StorageFacade`] - Never fails; routes between the two
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write (quota, policy, I/O).
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn clear(&self) -> StoreResult<()>;

    /// Returns the key at ordinal position `index`, or `None` if out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn key(&self, index: usize) -> StoreResult<Option<String>>;

    /// Returns the number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn length(&self) -> StoreResult<usize>;
}
