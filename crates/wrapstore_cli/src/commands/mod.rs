//! CLI command implementations.

pub mod entries;
pub mod probe;

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wrapstore_core::{
    primary_facade, session_facade, standalone_facade, FileStore, HostConfig, HostContext,
    KeyValueStore, StorageFacade, StoreConfig,
};

/// Where the facade's persistent side comes from.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Host data directory (primary and session documents).
    pub dir: Option<PathBuf>,
    /// Single store document, wrapped standalone.
    pub file: Option<PathBuf>,
    /// Use the session store of the host instead of the primary one.
    pub session: bool,
    /// Byte quota applied to the persistent store.
    pub quota: Option<u64>,
    /// Open the persistent store disabled.
    pub disabled: bool,
}

impl StoreOptions {
    fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .quota_bytes(self.quota)
            .enabled(!self.disabled)
    }
}

/// A facade plus the persistent store behind it, if any.
pub struct Selection {
    /// The facade all data commands go through.
    pub facade: StorageFacade,
    /// The wrapped persistent store; `None` for a pure in-memory facade.
    pub persistent: Option<Arc<dyn KeyValueStore>>,
}

/// Builds the facade described by `options`.
///
/// Store settings without a persistent store, and `session` without a host
/// directory, are rejected rather than ignored.
pub fn select(options: &StoreOptions) -> Result<Selection, Box<dyn std::error::Error>> {
    let has_store = options.dir.is_some() || options.file.is_some();
    if !has_store && (options.quota.is_some() || options.disabled) {
        return Err("--quota and --disabled need --dir or --file".into());
    }
    if options.session && options.dir.is_none() {
        return Err("--session needs --dir".into());
    }

    if let Some(file) = &options.file {
        info!("Wrapping store document {:?}", file);
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::open(file, options.store_config())?);
        return Ok(Selection {
            facade: standalone_facade(Arc::clone(&store)),
            persistent: Some(store),
        });
    }

    let host = match &options.dir {
        Some(dir) => {
            let config = HostConfig::new(dir).store(options.store_config());
            Some(HostContext::open(&config)?)
        }
        None => {
            info!("No host directory given; data will not outlive this process");
            None
        }
    };

    let persistent = host.as_ref().map(|h| {
        if options.session {
            Arc::clone(h.session())
        } else {
            Arc::clone(h.primary())
        }
    });
    let facade = if options.session {
        session_facade(host.as_ref())
    } else {
        primary_facade(host.as_ref())
    };

    Ok(Selection { facade, persistent })
}

/// Prints `value` as JSON or through `text`.
pub fn emit<T: Serialize>(
    value: &T,
    format: &str,
    text: impl FnOnce(&T),
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(value)?),
        _ => text(value),
    }
    Ok(())
}
