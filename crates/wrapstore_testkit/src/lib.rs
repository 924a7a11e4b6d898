//! # WrapStore Testkit
//!
//! Test utilities for WrapStore.
//!
//! This crate provides:
//! - Fault-injecting stores with switchable, per-operation failures
//! - Property-based test generators and a reference model
//! - Host fixtures backed by memory, temp files, or faulty stores
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wrapstore_testkit::prelude::*;
//! use wrapstore_core::StorageFacade;
//!
//! #[test]
//! fn survives_a_broken_store() {
//!     let store = Arc::new(FaultyStore::failing(&[Op::Set]));
//!     let facade = StorageFacade::wrap(store);
//!     facade.set("a", "1");
//!     assert_eq!(facade.get("a").as_deref(), Some("1"));
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod faults;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::faults::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use faults::*;
pub use fixtures::*;
pub use generators::*;
