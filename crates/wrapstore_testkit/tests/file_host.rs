//! File-backed hosts: quota exhaustion and policy changes through a facade.

use std::sync::Arc;
use wrapstore_core::{
    primary_facade, session_facade, standalone_facade, FileStore, HostConfig, HostContext,
    KeyValueStore, StoreConfig,
};
use wrapstore_testkit::prelude::*;

#[test]
fn quota_exhaustion_switches_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    // Room for one small entry plus the probe's 88-byte round trip.
    let store = Arc::new(
        FileStore::open(
            &dir.path().join("store.json"),
            StoreConfig::new().quota_bytes(Some(100)),
        )
        .unwrap(),
    );
    let facade = standalone_facade(store.clone());

    facade.set("a", "1");
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

    // Fill the store directly so no probe fits any more.
    store.set("filler", "0123456789ab").unwrap();
    facade.set("b", "2");
    assert_eq!(facade.get("b").as_deref(), Some("2"));
    assert_eq!(facade.get("a"), None);
    assert_eq!(store.get("b").unwrap(), None);

    // Free space again and the persistent side is back.
    store.remove("filler").unwrap();
    assert_eq!(facade.get("a").as_deref(), Some("1"));
    assert_eq!(facade.get("b"), None);
}

#[test]
fn disabled_by_policy_mid_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(
        FileStore::open(&dir.path().join("store.json"), StoreConfig::default()).unwrap(),
    );
    let facade = standalone_facade(store.clone());

    facade.set("a", "1");
    store.set_enabled(false);
    assert_eq!(facade.length(), 0);
    facade.set("a", "2");
    assert_eq!(facade.get("a").as_deref(), Some("2"));

    store.set_enabled(true);
    assert_eq!(facade.get("a").as_deref(), Some("1"));
}

#[test]
fn primary_survives_restart_session_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig::new(dir.path());

    {
        let host = HostContext::open(&config).unwrap();
        primary_facade(Some(&host)).set("theme", "dark");
        session_facade(Some(&host)).set("tab", "3");
    }

    let host = HostContext::open(&config).unwrap();
    let primary = primary_facade(Some(&host));
    assert_eq!(primary.get("theme").as_deref(), Some("dark"));
    assert_eq!(primary.length(), 1);
    assert_eq!(session_facade(Some(&host)).get("tab"), None);
}

#[test]
fn file_host_fixture_round_trip() {
    let test_host = TestHost::file();
    let facade = primary_facade(Some(&test_host.host));
    facade.set("k", "v");

    let dir = test_host.path().unwrap();
    let reopened = FileStore::open(&dir.join("primary.json"), StoreConfig::default()).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn disabled_file_host_writes_nothing() {
    let test_host = TestHost::file_with(StoreConfig::new().enabled(false));
    let facade = primary_facade(Some(&test_host.host));
    facade.set("k", "v");
    assert_eq!(facade.get("k").as_deref(), Some("v"));

    let dir = test_host.path().unwrap();
    assert!(!dir.join("primary.json").exists());
}
