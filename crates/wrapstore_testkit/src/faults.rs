//! Fault-injecting stores.
//!
//! [`FaultyStore`] behaves like an in-memory store until told otherwise.
//! Each operation can be made to fail independently, reads can be made to
//! return the wrong value, and faults can be switched at any time to model
//! a store whose capability changes mid-session.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use wrapstore_core::{InMemoryStore, KeyValueStore, StoreError, StoreResult};

/// A store operation, used to select faults and read call counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `get`
    Get,
    /// `set`
    Set,
    /// `remove`
    Remove,
    /// `clear`
    Clear,
    /// `key`
    Key,
    /// `length`
    Length,
}

impl Op {
    /// All operations.
    pub const ALL: [Op; 6] = [Op::Get, Op::Set, Op::Remove, Op::Clear, Op::Key, Op::Length];

    const fn index(self) -> usize {
        match self {
            Op::Get => 0,
            Op::Set => 1,
            Op::Remove => 2,
            Op::Clear => 3,
            Op::Key => 4,
            Op::Length => 5,
        }
    }
}

/// An in-memory store with switchable faults and call counters.
#[derive(Debug, Default)]
pub struct FaultyStore {
    inner: InMemoryStore,
    failing: [AtomicBool; 6],
    corrupt_reads: AtomicBool,
    calls: [AtomicUsize; 6],
}

impl FaultyStore {
    /// Creates a store with no faults.
    #[must_use]
    pub fn healthy() -> Self {
        Self::default()
    }

    /// Creates a store where the given operations fail.
    #[must_use]
    pub fn failing(ops: &[Op]) -> Self {
        let store = Self::default();
        for op in ops {
            store.fail(*op, true);
        }
        store
    }

    /// Creates a store where every operation fails.
    #[must_use]
    pub fn disabled() -> Self {
        Self::failing(&Op::ALL)
    }

    /// Makes `op` fail (or succeed again).
    pub fn fail(&self, op: Op, failing: bool) {
        self.failing[op.index()].store(failing, Ordering::SeqCst);
    }

    /// Makes every operation fail (or succeed again).
    pub fn fail_all(&self, failing: bool) {
        for op in Op::ALL {
            self.fail(op, failing);
        }
    }

    /// Makes `get` return a value different from what was stored.
    pub fn corrupt_reads(&self, corrupt: bool) {
        self.corrupt_reads.store(corrupt, Ordering::SeqCst);
    }

    /// Returns how many times `op` was called, failed calls included.
    #[must_use]
    pub fn calls(&self, op: Op) -> usize {
        self.calls[op.index()].load(Ordering::SeqCst)
    }

    /// Returns the total number of calls across all operations.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        Op::ALL.iter().map(|op| self.calls(*op)).sum()
    }

    /// Returns a copy of the stored entries, bypassing faults.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.inner.entries()
    }

    fn enter(&self, op: Op) -> StoreResult<()> {
        self.calls[op.index()].fetch_add(1, Ordering::SeqCst);
        if self.failing[op.index()].load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(format!("injected {op:?} fault")))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FaultyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.enter(Op::Get)?;
        let value = self.inner.get(key);
        if self.corrupt_reads.load(Ordering::SeqCst) {
            return Ok(value.map(|v| format!("{v}~")));
        }
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.enter(Op::Set)?;
        self.inner.set(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.enter(Op::Remove)?;
        self.inner.remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.enter(Op::Clear)?;
        self.inner.clear();
        Ok(())
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        self.enter(Op::Key)?;
        Ok(self.inner.key(index))
    }

    fn length(&self) -> StoreResult<usize> {
        self.enter(Op::Length)?;
        Ok(self.inner.len())
    }
}
