//! Capability probe benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;
use wrapstore_core::probe::{is_supported, probe_key};
use wrapstore_core::{FileStore, InMemoryStore, StoreConfig};
use wrapstore_testkit::{FaultyStore, Op};

/// Benchmark probe key generation alone.
fn bench_probe_key(c: &mut Criterion) {
    c.bench_function("probe_key", |b| {
        b.iter(|| black_box(probe_key()));
    });
}

/// Benchmark probing stores in different states.
fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe");

    let memory = InMemoryStore::new();
    group.bench_function("inmemory", |b| {
        b.iter(|| black_box(is_supported(black_box(&memory))));
    });

    let rejecting = FaultyStore::failing(&[Op::Set]);
    group.bench_function("rejecting_set", |b| {
        b.iter(|| black_box(is_supported(black_box(&rejecting))));
    });

    group.finish();
}

/// Benchmark probing a file store, which rewrites its document twice.
fn bench_probe_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_file");
    group.sample_size(20); // Every probe hits the disk

    for entries in [0usize, 100, 1000] {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(&temp_dir.path().join("bench.json"), StoreConfig::default())
            .unwrap();
        for (k, v) in wrapstore_bench::generate_pairs(entries, 32) {
            wrapstore_core::KeyValueStore::set(&store, &k, &v).unwrap();
        }

        group.bench_function(format!("{entries}_entries"), |b| {
            b.iter(|| black_box(is_supported(&store)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_probe_key, bench_probe, bench_probe_file);
criterion_main!(benches);
