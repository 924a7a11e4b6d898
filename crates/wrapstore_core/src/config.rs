//! Store and host configuration.

use std::path::{Path, PathBuf};

/// Default file name of the primary store inside a host data directory.
pub const PRIMARY_FILE_NAME: &str = "primary.json";

/// Default file name of the session store inside a host data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Configuration for opening a [`crate::FileStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum total bytes (keys plus values) the store may hold.
    /// `None` means unlimited.
    pub quota_bytes: Option<u64>,

    /// Whether the store accepts calls. A disabled store fails every call.
    pub enabled: bool,

    /// Whether to fsync the document before it replaces the old one.
    pub sync_on_write: bool,

    /// Whether to create missing parent directories on open.
    pub create_dirs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            quota_bytes: None,
            enabled: true,
            sync_on_write: false,
            create_dirs: true,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the byte quota.
    #[must_use]
    pub const fn quota_bytes(mut self, quota: Option<u64>) -> Self {
        self.quota_bytes = quota;
        self
    }

    /// Sets whether the store starts enabled.
    #[must_use]
    pub const fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self
    }

    /// Sets whether every write is synced to disk.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether parent directories are created on open.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }
}

/// Configuration for opening a file-backed [`crate::HostContext`].
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Directory holding the host's store documents.
    pub data_dir: PathBuf,

    /// File name of the primary store.
    pub primary_file: String,

    /// File name of the session-scoped store.
    pub session_file: String,

    /// Settings applied to both stores.
    pub store: StoreConfig,
}

impl HostConfig {
    /// Creates a configuration rooted at `data_dir` with default file names.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            primary_file: PRIMARY_FILE_NAME.to_owned(),
            session_file: SESSION_FILE_NAME.to_owned(),
            store: StoreConfig::default(),
        }
    }

    /// Sets the primary store file name.
    #[must_use]
    pub fn primary_file(mut self, name: impl Into<String>) -> Self {
        self.primary_file = name.into();
        self
    }

    /// Sets the session store file name.
    #[must_use]
    pub fn session_file(mut self, name: impl Into<String>) -> Self {
        self.session_file = name.into();
        self
    }

    /// Sets the store configuration shared by both stores.
    #[must_use]
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Returns the full path of the primary store document.
    #[must_use]
    pub fn primary_path(&self) -> PathBuf {
        self.data_dir.join(&self.primary_file)
    }

    /// Returns the full path of the session store document.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.quota_bytes, None);
        assert!(config.enabled);
        assert!(!config.sync_on_write);
        assert!(config.create_dirs);
    }

    #[test]
    fn store_config_builder() {
        let config = StoreConfig::new()
            .quota_bytes(Some(1024))
            .enabled(false)
            .sync_on_write(true)
            .create_dirs(false);
        assert_eq!(config.quota_bytes, Some(1024));
        assert!(!config.enabled);
        assert!(config.sync_on_write);
        assert!(!config.create_dirs);
    }

    #[test]
    fn host_config_paths() {
        let config = HostConfig::new("/tmp/host");
        assert_eq!(config.primary_path(), Path::new("/tmp/host/primary.json"));
        assert_eq!(config.session_path(), Path::new("/tmp/host/session.json"));

        let config = config.primary_file("local.json").session_file("tab.json");
        assert_eq!(config.primary_path(), Path::new("/tmp/host/local.json"));
        assert_eq!(config.session_path(), Path::new("/tmp/host/tab.json"));
        assert_eq!(config.data_dir(), Path::new("/tmp/host"));
    }
}
