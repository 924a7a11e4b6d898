//! Error types for store operations.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that a key-value store can report.
///
/// These never escape a [`crate::StorageFacade`]; they are only visible to
/// code that talks to a store directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The persisted document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted document is not a key-value object.
    #[error("store corrupted: {0}")]
    Corrupted(String),

    /// A write would push the store past its byte quota.
    #[error("quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Total bytes the store would hold after the write.
        needed: u64,
        /// The configured quota.
        quota: u64,
    },

    /// The store has been disabled by policy.
    #[error("store is disabled")]
    Disabled,

    /// The configuration cannot be used to open a store.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        message: String,
    },

    /// The store rejected the call for another reason.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
