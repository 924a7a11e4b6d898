//! Host execution context.
//!
//! The host is whatever environment hands out persistent stores: a primary
//! store that outlives the process and a session-scoped one. Code that may
//! run without a host (headless jobs, tests) passes `None` and gets
//! in-memory facades without any probing.

use crate::config::HostConfig;
use crate::error::{StoreError, StoreResult};
use crate::facade::StorageFacade;
use crate::file::FileStore;
use crate::store::KeyValueStore;
use std::fmt;
use std::sync::Arc;

/// Persistent stores provided by the host environment.
#[derive(Clone)]
pub struct HostContext {
    primary: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl HostContext {
    /// Creates a context from arbitrary stores.
    #[must_use]
    pub fn new(primary: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { primary, session }
    }

    /// Opens a file-backed context under `config.data_dir`.
    ///
    /// The primary document is loaded as is. The session document is
    /// cleared, so its contents last for one host session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidConfig`] if both stores resolve to the
    /// same document. Returns an error if either document cannot be opened,
    /// or if the session document cannot be cleared while the store is
    /// enabled.
    pub fn open(config: &HostConfig) -> StoreResult<Self> {
        if config.primary_path() == config.session_path() {
            return Err(StoreError::InvalidConfig {
                message: format!(
                    "primary and session stores share {}",
                    config.primary_path().display()
                ),
            });
        }

        let primary = FileStore::open(&config.primary_path(), config.store.clone())?;
        let session = FileStore::open(&config.session_path(), config.store.clone())?;
        if session.is_enabled() {
            session.clear()?;
        }

        tracing::info!(
            data_dir = %config.data_dir.display(),
            primary_entries = primary.length().unwrap_or(0),
            "opened host context"
        );

        Ok(Self::new(Arc::new(primary), Arc::new(session)))
    }

    /// Returns the primary persistent store.
    #[must_use]
    pub fn primary(&self) -> &Arc<dyn KeyValueStore> {
        &self.primary
    }

    /// Returns the session-scoped persistent store.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn KeyValueStore> {
        &self.session
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}

/// Returns a facade over the host's primary store.
///
/// Without a host this is an in-memory facade.
#[must_use]
pub fn primary_facade(host: Option<&HostContext>) -> StorageFacade {
    match host {
        Some(host) => StorageFacade::wrap(Arc::clone(host.primary())),
        None => {
            tracing::debug!("no host context, primary facade is in-memory");
            StorageFacade::in_memory()
        }
    }
}

/// Returns a facade over the host's session store.
///
/// Without a host this is an in-memory facade.
#[must_use]
pub fn session_facade(host: Option<&HostContext>) -> StorageFacade {
    match host {
        Some(host) => StorageFacade::wrap(Arc::clone(host.session())),
        None => {
            tracing::debug!("no host context, session facade is in-memory");
            StorageFacade::in_memory()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::memory::InMemoryStore;
    use tempfile::tempdir;

    #[test]
    fn host_facades_use_their_own_store() {
        let primary = Arc::new(InMemoryStore::new());
        let session = Arc::new(InMemoryStore::new());
        let host = HostContext::new(primary.clone(), session.clone());

        primary_facade(Some(&host)).set("p", "1");
        session_facade(Some(&host)).set("s", "2");

        assert_eq!(primary.entries(), vec![("p".into(), "1".into())]);
        assert_eq!(session.entries(), vec![("s".into(), "2".into())]);
    }

    #[test]
    fn host_facades_share_the_host_store() {
        let host = HostContext::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
        );

        primary_facade(Some(&host)).set("k", "v");
        assert_eq!(primary_facade(Some(&host)).get("k").as_deref(), Some("v"));
    }

    #[test]
    fn no_host_gives_independent_memory_facades() {
        let first = primary_facade(None);
        first.set("k", "v");
        assert_eq!(first.get("k").as_deref(), Some("v"));

        let second = session_facade(None);
        assert_eq!(second.get("k"), None);
    }

    #[test]
    fn host_open_keeps_primary_and_resets_session() {
        let dir = tempdir().unwrap();
        let config = HostConfig::new(dir.path());

        {
            let host = HostContext::open(&config).unwrap();
            primary_facade(Some(&host)).set("p", "kept");
            session_facade(Some(&host)).set("s", "dropped");
        }

        let host = HostContext::open(&config).unwrap();
        assert_eq!(primary_facade(Some(&host)).get("p").as_deref(), Some("kept"));
        assert_eq!(session_facade(Some(&host)).get("s"), None);
        assert!(config.session_path().exists());
    }

    #[test]
    fn host_open_rejects_shared_document() {
        let dir = tempdir().unwrap();
        let config = HostConfig::new(dir.path()).session_file("primary.json");

        let result = HostContext::open(&config);
        assert!(matches!(result, Err(StoreError::InvalidConfig { .. })));
        assert!(!config.primary_path().exists());
    }

    #[test]
    fn host_open_disabled_still_yields_working_facades() {
        let dir = tempdir().unwrap();
        let config = HostConfig::new(dir.path()).store(StoreConfig::new().enabled(false));

        let host = HostContext::open(&config).unwrap();
        let facade = primary_facade(Some(&host));
        facade.set("a", "1");
        assert_eq!(facade.get("a").as_deref(), Some("1"));
        assert!(!config.primary_path().exists());
    }
}
