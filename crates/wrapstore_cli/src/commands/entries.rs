//! Data commands: everything that goes through the facade.

use super::emit;
use serde::Serialize;
use wrapstore_core::StorageFacade;

/// Result of a `get`.
#[derive(Debug, Serialize)]
pub struct GetResult {
    /// Requested key.
    pub key: String,
    /// Stored value, if any.
    pub value: Option<String>,
}

/// One enumerated entry.
#[derive(Debug, Serialize)]
pub struct KeyEntry {
    /// Ordinal position.
    pub index: usize,
    /// Key at that position.
    pub key: String,
}

/// Result of `len`.
#[derive(Debug, Serialize)]
pub struct LengthResult {
    /// Number of entries.
    pub length: usize,
}

/// Runs the get command. Exits non-zero through the caller if absent.
pub fn get(
    facade: &StorageFacade,
    key: &str,
    format: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let result = GetResult {
        key: key.to_owned(),
        value: facade.get(key),
    };
    let found = result.value.is_some();
    emit(&result, format, |r| match &r.value {
        Some(value) => println!("{value}"),
        None => eprintln!("Key not found: {}", r.key),
    })?;
    Ok(found)
}

/// Runs the set command.
pub fn set(facade: &StorageFacade, key: &str, value: &str) {
    facade.set(key, value);
}

/// Runs the remove command.
pub fn remove(facade: &StorageFacade, key: &str) {
    facade.remove(key);
}

/// Runs the clear command.
pub fn clear(facade: &StorageFacade) {
    facade.clear();
}

/// Collects all keys by position.
///
/// Stops at the first gap, since enumeration order may shift if the
/// serving side changes between calls.
pub fn collect_keys(facade: &StorageFacade) -> Vec<KeyEntry> {
    let length = facade.length();
    let mut keys = Vec::with_capacity(length);
    for index in 0..length {
        match facade.key(index) {
            Some(key) => keys.push(KeyEntry { index, key }),
            None => break,
        }
    }
    keys
}

/// Runs the keys command.
pub fn keys(facade: &StorageFacade, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let keys = collect_keys(facade);
    emit(&keys, format, |keys| {
        for entry in keys {
            println!("{}", entry.key);
        }
    })
}

/// Runs the len command.
pub fn length(facade: &StorageFacade, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = LengthResult {
        length: facade.length(),
    };
    emit(&result, format, |r| println!("{}", r.length))
}
