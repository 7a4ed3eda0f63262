//! Per-key lock registry
//!
//! One mutual-exclusion lock per key, created on first touch and reused
//! for every later acquisition. Locks are never removed, so lock identity
//! is stable for the lifetime of the table and memory grows with the
//! number of distinct keys ever locked — the accepted trade-off for a
//! registry with no release bookkeeping.

use dashmap::DashMap;
use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};
use std::hash::Hash;
use std::sync::Arc;

/// Owned guard for a single key's lock
///
/// The guard holds an `Arc` to its mutex, so it can outlive the registry
/// borrow and travel inside a transaction. Dropping it releases the key.
pub type KeyGuard = ArcMutexGuard<RawMutex, ()>;

/// Registry handing out one exclusive lock per key
///
/// Concurrent first-time lookups of the same key land on the same map
/// entry, so exactly one mutex is ever created per key. There is no
/// release or delete operation.
pub struct LockTable<K> {
    locks: DashMap<K, Arc<Mutex<()>>>,
}

impl<K> LockTable<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty lock table
    pub fn new() -> Self {
        LockTable {
            locks: DashMap::new(),
        }
    }

    /// Look up the lock for `key`, creating it on first use
    ///
    /// The entry API gives atomic insert-if-absent, and the shard guard
    /// is dropped before the returned lock is ever blocked on.
    fn lock_for(&self, key: &K) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Acquire `key`'s exclusive lock, blocking until it is free
    pub fn acquire(&self, key: &K) -> KeyGuard {
        let lock = self.lock_for(key);
        lock.lock_arc()
    }

    /// Try to acquire `key`'s exclusive lock without blocking
    ///
    /// Returns `None` if another holder has the key.
    pub fn try_acquire(&self, key: &K) -> Option<KeyGuard> {
        let lock = self.lock_for(key);
        lock.try_lock_arc()
    }

    /// Number of distinct keys ever locked through this table
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// True if no key has ever been locked
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl<K> Default for LockTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
