//! Probe command implementation.

use super::{emit, Selection};
use serde::Serialize;
use wrapstore_core::probe::is_supported;

/// Capability report for the selected store.
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    /// Whether a persistent store was configured at all.
    pub persistent: bool,
    /// Whether it currently passes the capability probe.
    pub supported: bool,
}

/// Checks the persistent store without routing any data.
pub fn check(selection: &Selection) -> ProbeResult {
    match &selection.persistent {
        Some(store) => ProbeResult {
            persistent: true,
            supported: is_supported(&**store),
        },
        None => ProbeResult {
            persistent: false,
            supported: false,
        },
    }
}

/// Runs the probe command.
pub fn run(selection: &Selection, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = check(selection);
    emit(&result, format, |r| match (r.persistent, r.supported) {
        (false, _) => println!("No persistent store: using memory"),
        (true, true) => println!("✓ Persistent store is usable"),
        (true, false) => println!("✗ Persistent store is unusable: falling back to memory"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{select, StoreOptions};
    use tempfile::tempdir;

    #[test]
    fn probe_without_store() {
        let selection = select(&StoreOptions::default()).unwrap();
        let result = check(&selection);
        assert!(!result.persistent);
        assert!(!result.supported);
    }

    #[test]
    fn probe_file_store() {
        let dir = tempdir().unwrap();
        let mut options = StoreOptions {
            file: Some(dir.path().join("store.json")),
            ..Default::default()
        };
        assert!(check(&select(&options).unwrap()).supported);

        options.disabled = true;
        let result = check(&select(&options).unwrap());
        assert!(result.persistent);
        assert!(!result.supported);
    }

    #[test]
    fn probe_quota_too_small() {
        let dir = tempdir().unwrap();
        let options = StoreOptions {
            dir: Some(dir.path().to_path_buf()),
            quota: Some(10),
            ..Default::default()
        };
        assert!(!check(&select(&options).unwrap()).supported);
    }
}
