//! Capability probe.
//!
//! A store is usable when it accepts a write and hands the same value back.
//! Nothing short of actually trying tells us that: quota, policy and I/O
//! state all change at runtime. [`is_supported`] therefore performs a real
//! write/read/delete cycle with a throwaway key every time it is called.
//!
//! The result is never cached.

use crate::error::StoreResult;
use crate::store::KeyValueStore;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Number of random tokens joined into one probe key.
pub const PROBE_TOKENS: usize = 4;

/// Length of each random token.
pub const PROBE_TOKEN_LEN: usize = 11;

/// Generates a key that will not collide with caller keys in practice.
///
/// The key is [`PROBE_TOKENS`] independent alphanumeric tokens of
/// [`PROBE_TOKEN_LEN`] characters each, concatenated.
#[must_use]
pub fn probe_key() -> String {
    let mut rng = rand::thread_rng();
    let mut key = String::with_capacity(PROBE_TOKENS * PROBE_TOKEN_LEN);
    for _ in 0..PROBE_TOKENS {
        key.extend(
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(PROBE_TOKEN_LEN)
                .map(char::from),
        );
    }
    key
}

/// Returns `true` if `store` currently accepts writes and reads them back.
///
/// Writes a fresh probe key with itself as value, reads it back, compares,
/// and removes it. Any error, or a value that does not round-trip, yields
/// `false`. Errors are never propagated.
pub fn is_supported(store: &dyn KeyValueStore) -> bool {
    let key = probe_key();
    match round_trip(store, &key) {
        Ok(true) => true,
        Ok(false) => {
            tracing::trace!("probe value did not round-trip");
            false
        }
        Err(e) => {
            tracing::trace!(error = %e, "probe failed");
            false
        }
    }
}

fn round_trip(store: &dyn KeyValueStore, key: &str) -> StoreResult<bool> {
    store.set(key, key)?;
    // Once the write landed, the key is removed whatever the read did.
    let read = store.get(key);
    let removed = store.remove(key);
    let matches = read?.as_deref() == Some(key);
    removed?;
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::InMemoryStore;
    use std::collections::HashSet;

    /// Store that delegates to memory but fails or lies on chosen calls.
    #[derive(Default)]
    struct Broken {
        inner: InMemoryStore,
        fail_set: bool,
        fail_get: bool,
        fail_remove: bool,
        wrong_value: bool,
    }

    impl KeyValueStore for Broken {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            if self.fail_get {
                return Err(StoreError::Unavailable("get".into()));
            }
            if self.wrong_value {
                return Ok(Some("something else".into()));
            }
            Ok(self.inner.get(key))
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_set {
                return Err(StoreError::QuotaExceeded { needed: 1, quota: 0 });
            }
            self.inner.set(key, value);
            Ok(())
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            if self.fail_remove {
                return Err(StoreError::Disabled);
            }
            self.inner.remove(key);
            Ok(())
        }

        fn clear(&self) -> StoreResult<()> {
            self.inner.clear();
            Ok(())
        }

        fn key(&self, index: usize) -> StoreResult<Option<String>> {
            Ok(self.inner.key(index))
        }

        fn length(&self) -> StoreResult<usize> {
            Ok(self.inner.len())
        }
    }

    #[test]
    fn probe_key_shape() {
        let key = probe_key();
        assert_eq!(key.len(), PROBE_TOKENS * PROBE_TOKEN_LEN);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn probe_keys_are_distinct() {
        let keys: HashSet<String> = (0..1000).map(|_| probe_key()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn probe_working_store() {
        let store = InMemoryStore::new();
        assert!(is_supported(&store));
    }

    #[test]
    fn probe_leaves_no_residue() {
        let store = InMemoryStore::with_entries([("user", "data")]);
        assert!(is_supported(&store));
        assert_eq!(store.entries(), vec![("user".into(), "data".into())]);
    }

    #[test]
    fn probe_failing_set() {
        let store = Broken {
            fail_set: true,
            ..Default::default()
        };
        assert!(!is_supported(&store));
    }

    #[test]
    fn probe_failing_get() {
        let store = Broken {
            fail_get: true,
            ..Default::default()
        };
        assert!(!is_supported(&store));
        assert!(store.inner.is_empty());
    }

    #[test]
    fn probe_failing_remove() {
        let store = Broken {
            fail_remove: true,
            ..Default::default()
        };
        assert!(!is_supported(&store));
    }

    #[test]
    fn probe_value_mismatch_still_cleans_up() {
        let store = Broken {
            wrong_value: true,
            ..Default::default()
        };
        assert!(!is_supported(&store));
        assert!(store.inner.is_empty());
    }
}
