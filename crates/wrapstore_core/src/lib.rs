//! # WrapStore Core
//!
//! A key-value storage facade that quietly falls back to memory.
//!
//! Persistent stores come and go: they fill up, get disabled by policy, or
//! do not exist at all when running headless. A [`StorageFacade`] hides
//! that. Before each operation it probes the wrapped store with a real
//! write/read/delete cycle and routes the operation either to the store or
//! to a private [`InMemoryStore`].
//!
//! ## Design Principles
//!
//! - Stores are opaque string-to-string maps ([`KeyValueStore`])
//! - Capability is re-probed on every call, never cached
//! - Facade operations never fail; store errors become routing decisions
//! - The host environment is injected, never looked up globally
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - Ephemeral, insertion-ordered
//! - [`FileStore`] - Persistent JSON document with quota and enable switch
//! - [`StorageFacade`] - Routes between a persistent store and memory
//!
//! ## Example
//!
//! ```rust
//! use wrapstore_core::{primary_facade, HostContext};
//!
//! // No host available: the facade is purely in-memory.
//! let host: Option<&HostContext> = None;
//! let storage = primary_facade(host);
//! storage.set("a", "1");
//! assert_eq!(storage.get("a").as_deref(), Some("1"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod facade;
mod file;
mod host;
mod memory;
pub mod probe;
mod store;

pub use config::{HostConfig, StoreConfig, PRIMARY_FILE_NAME, SESSION_FILE_NAME};
pub use error::{StoreError, StoreResult};
pub use facade::{in_memory_facade, standalone_facade, StorageFacade};
pub use file::FileStore;
pub use host::{primary_facade, session_facade, HostContext};
pub use memory::InMemoryStore;
pub use store::KeyValueStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
