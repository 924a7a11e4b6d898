//! Storage facade with per-call fallback routing.
//!
//! A [`StorageFacade`] wraps a persistent store together with a private
//! [`InMemoryStore`]. Before every operation it runs
//! [`probe::is_supported`] against the persistent store and sends the
//! operation to whichever side is usable right now.
//!
//! ## Consistency
//!
//! The two sides are never synchronized. If capability flips between a
//! `set` and the following `get`, the `get` is answered by the other side
//! and will not see the value. Callers needing strict consistency must
//! treat the facade as best-effort.

use crate::error::StoreResult;
use crate::memory::InMemoryStore;
use crate::probe;
use crate::store::KeyValueStore;
use std::fmt;
use std::sync::Arc;

enum Backend {
    /// Persistent store guarded by the probe, with an in-memory fallback.
    Fallback {
        persistent: Arc<dyn KeyValueStore>,
        memory: InMemoryStore,
    },
    /// No persistent store at all.
    Memory(InMemoryStore),
}

/// Which side a single call is sent to.
enum Route<'a> {
    Persistent(&'a dyn KeyValueStore),
    Memory(&'a InMemoryStore),
}

/// A key-value store that never fails.
///
/// Every call is served either by the wrapped persistent store or by a
/// private in-memory store; the caller cannot tell which. Return shapes are
/// the same on both sides.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wrapstore_core::{FileStore, StorageFacade, StoreConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = FileStore::open(&dir.path().join("prefs.json"), StoreConfig::default()).unwrap();
/// let file = Arc::new(file);
/// let facade = StorageFacade::wrap(file.clone());
///
/// facade.set("theme", "dark");
/// assert_eq!(facade.get("theme").as_deref(), Some("dark"));
///
/// // The store goes away; the facade keeps working from memory.
/// file.set_enabled(false);
/// facade.set("theme", "light");
/// assert_eq!(facade.get("theme").as_deref(), Some("light"));
/// ```
pub struct StorageFacade {
    backend: Backend,
}

impl StorageFacade {
    /// Wraps `persistent`, falling back to memory whenever it is unusable.
    #[must_use]
    pub fn wrap(persistent: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Backend::Fallback {
                persistent,
                memory: InMemoryStore::new(),
            },
        }
    }

    /// Creates a facade with no persistent store. No probing ever happens.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(InMemoryStore::new()),
        }
    }

    fn route(&self) -> Route<'_> {
        match &self.backend {
            Backend::Memory(memory) => Route::Memory(memory),
            Backend::Fallback { persistent, memory } => {
                if probe::is_supported(&**persistent) {
                    tracing::debug!("routing to persistent store");
                    Route::Persistent(&**persistent)
                } else {
                    tracing::debug!("persistent store unusable, routing to memory");
                    Route::Memory(memory)
                }
            }
        }
    }

    /// Runs `op` on the side chosen by the probe.
    ///
    /// A persistent store that passes the probe and then fails the real
    /// call is not conforming; that call is answered from memory instead.
    fn dispatch<T>(
        &self,
        op: &'static str,
        persistent: impl FnOnce(&dyn KeyValueStore) -> StoreResult<T>,
        memory: impl FnOnce(&InMemoryStore) -> T,
    ) -> T {
        match self.route() {
            Route::Memory(store) => memory(store),
            Route::Persistent(store) => match persistent(store) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(op, error = %e, "store failed after passing probe");
                    memory(self.fallback())
                }
            },
        }
    }

    fn fallback(&self) -> &InMemoryStore {
        match &self.backend {
            Backend::Fallback { memory, .. } | Backend::Memory(memory) => memory,
        }
    }

    /// Returns the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.dispatch("get", |s| s.get(key), |m| m.get(key))
    }

    /// Stores `value` under `key`.
    pub fn set(&self, key: &str, value: &str) {
        self.dispatch("set", |s| s.set(key, value), |m| m.set(key, value));
    }

    /// Removes `key` if present.
    pub fn remove(&self, key: &str) {
        self.dispatch("remove", |s| s.remove(key), |m| m.remove(key));
    }

    /// Removes every entry from the side currently in use.
    pub fn clear(&self) {
        self.dispatch("clear", |s| s.clear(), |m| m.clear());
    }

    /// Returns the key at ordinal position `index`, or `None` if out of range.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<String> {
        self.dispatch("key", |s| s.key(index), |m| m.key(index))
    }

    /// Returns the number of entries on the side currently in use.
    #[must_use]
    pub fn length(&self) -> usize {
        self.dispatch("length", |s| s.length(), |m| m.len())
    }
}

impl fmt::Debug for StorageFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.backend {
            Backend::Fallback { .. } => "fallback",
            Backend::Memory(_) => "memory",
        };
        f.debug_struct("StorageFacade")
            .field("backend", &kind)
            .finish_non_exhaustive()
    }
}

impl KeyValueStore for StorageFacade {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(StorageFacade::get(self, key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        StorageFacade::set(self, key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        StorageFacade::remove(self, key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        StorageFacade::clear(self);
        Ok(())
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        Ok(StorageFacade::key(self, index))
    }

    fn length(&self) -> StoreResult<usize> {
        Ok(StorageFacade::length(self))
    }
}

/// Wraps a caller-supplied store.
///
/// The store should satisfy [`KeyValueStore`]; a store that fails outside
/// the probe is tolerated but loses the calls it fails.
#[must_use]
pub fn standalone_facade(store: Arc<dyn KeyValueStore>) -> StorageFacade {
    StorageFacade::wrap(store)
}

/// Creates a facade that only ever uses memory.
#[must_use]
pub fn in_memory_facade() -> StorageFacade {
    StorageFacade::in_memory()
}
