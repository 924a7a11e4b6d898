//! File-backed persistent key-value store.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::KeyValueStore;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// A persistent key-value store kept as a JSON object document on disk.
///
/// Data survives process restarts. Entries are cached in memory; every
/// mutation rewrites the whole document to a sibling temp file and renames
/// it over the original, so a failed write never leaves a torn document.
///
/// # Availability
///
/// Unlike [`crate::InMemoryStore`], this store can refuse calls:
/// - A `set` that would exceed `quota_bytes` fails with
///   [`StoreError::QuotaExceeded`] and changes nothing
/// - While disabled (see [`FileStore::set_enabled`]) every call fails with
///   [`StoreError::Disabled`]
/// - I/O failures surface as [`StoreError::Io`]
///
/// # Example
///
/// ```no_run
/// use wrapstore_core::{FileStore, KeyValueStore, StoreConfig};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("prefs.json"), StoreConfig::default()).unwrap();
/// store.set("theme", "dark").unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    config: StoreConfig,
    enabled: AtomicBool,
    entries: RwLock<IndexMap<String, String>>,
}

impl FileStore {
    /// Opens or creates a store at `path`.
    ///
    /// An existing document is loaded; a missing or empty file starts an
    /// empty store. The file itself is written on the first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parent directories
    /// cannot be created, or the document is not a JSON object of strings.
    pub fn open(path: &Path, config: StoreConfig) -> StoreResult<Self> {
        if config.create_dirs {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = match fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => IndexMap::new(),
            Ok(text) => serde_json::from_str::<IndexMap<String, String>>(&text).map_err(|e| {
                StoreError::Corrupted(format!("{}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            enabled: AtomicBool::new(config.enabled),
            config,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the path to the underlying document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration the store was opened with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Enables or disables the store at runtime.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Returns `true` if the store currently accepts calls.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Returns the bytes currently counted against the quota.
    #[must_use]
    pub fn used_bytes(&self) -> u64 {
        used_bytes(&self.entries.read())
    }

    fn check_enabled(&self) -> StoreResult<()> {
        if self.is_enabled() {
            Ok(())
        } else {
            Err(StoreError::Disabled)
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn persist(&self, entries: &IndexMap<String, String>) -> StoreResult<()> {
        let tmp = self.temp_path();
        let written = self
            .write_document(&tmp, entries)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(StoreError::from));
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written
    }

    fn write_document(&self, tmp: &Path, entries: &IndexMap<String, String>) -> StoreResult<()> {
        let file = File::create(tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entries)?;
        writer.flush()?;
        if self.config.sync_on_write {
            writer.get_ref().sync_all()?;
        }
        Ok(())
    }
}

fn entry_bytes(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}

fn used_bytes(entries: &IndexMap<String, String>) -> u64 {
    entries.iter().map(|(k, v)| entry_bytes(k, v)).sum()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_enabled()?;
        let mut entries = self.entries.write();

        if let Some(quota) = self.config.quota_bytes {
            let replaced = entries.get(key).map_or(0, |old| entry_bytes(key, old));
            let needed = used_bytes(&entries) - replaced + entry_bytes(key, value);
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        let mut next = entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_enabled()?;
        let mut entries = self.entries.write();
        if !entries.contains_key(key) {
            return Ok(());
        }

        let mut next = entries.clone();
        next.shift_remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.check_enabled()?;
        let mut entries = self.entries.write();
        let next = IndexMap::new();
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.entries.read().get_index(index).map(|(k, _)| k.clone()))
    }

    fn length(&self) -> StoreResult<usize> {
        self.check_enabled()?;
        Ok(self.entries.read().len())
    }
}
