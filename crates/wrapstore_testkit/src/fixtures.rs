//! Test fixtures and host helpers.
//!
//! Provides ready-made host contexts for facade tests.

use crate::faults::FaultyStore;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wrapstore_core::{HostConfig, HostContext, InMemoryStore, StoreConfig};

/// A host context with automatic cleanup.
pub struct TestHost {
    /// The host context.
    pub host: HostContext,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestHost {
    /// Creates a host whose stores live in memory.
    pub fn memory() -> Self {
        Self {
            host: HostContext::new(
                Arc::new(InMemoryStore::new()),
                Arc::new(InMemoryStore::new()),
            ),
            _temp_dir: None,
        }
    }

    /// Creates a file-backed host in a temporary directory.
    pub fn file() -> Self {
        Self::file_with(StoreConfig::default())
    }

    /// Creates a file-backed host with the given store settings.
    pub fn file_with(store: StoreConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = HostConfig::new(temp_dir.path()).store(store);
        let host = HostContext::open(&config).expect("Failed to open host context");

        Self {
            host,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the data directory if file-backed, `None` if in-memory.
    pub fn path(&self) -> Option<&Path> {
        self._temp_dir.as_ref().map(|d| d.path())
    }
}

impl std::ops::Deref for TestHost {
    type Target = HostContext;

    fn deref(&self) -> &Self::Target {
        &self.host
    }
}

/// A host whose stores are [`FaultyStore`]s, with handles to both.
pub struct FaultyHost {
    /// The host context.
    pub host: HostContext,
    /// The primary store.
    pub primary: Arc<FaultyStore>,
    /// The session store.
    pub session: Arc<FaultyStore>,
}

impl FaultyHost {
    /// Creates a host with two healthy stores.
    pub fn new() -> Self {
        let primary = Arc::new(FaultyStore::healthy());
        let session = Arc::new(FaultyStore::healthy());
        Self {
            host: HostContext::new(primary.clone(), session.clone()),
            primary,
            session,
        }
    }
}

impl Default for FaultyHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a test with a temporary file-backed host.
pub fn with_file_host<F, R>(f: F) -> R
where
    F: FnOnce(&HostContext, &Path) -> R,
{
    let test_host = TestHost::file();
    let path = test_host.path().expect("File host should have a path");
    f(&test_host.host, path)
}
