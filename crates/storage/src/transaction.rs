//! Multi-key transactions over the store
//!
//! A transaction is a bounded unit of work over a fixed key set. Reads
//! and writes go to a private overlay seeded from the store at start;
//! nothing is visible outside the transaction until `commit` copies the
//! overlay into the authoritative mapping in one critical section.
//!
//! A transaction instance is meant to be driven by a single thread. The
//! overlay needs no synchronization of its own: the per-key locks taken
//! at start keep every locked key stable until the transaction ends.

use crate::store::Store;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use till_concurrency::KeyGuard;
use till_core::{Error, Result};

/// Lifecycle state of a transaction
///
/// State transitions:
/// - `Pending` → `Committed` (via `commit`)
/// - `Pending` → `RolledBack` (via `rollback` or drop)
///
/// Both end states are terminal; there are no transitions out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Transaction holds its locks and accepts reads and writes
    Pending,
    /// Overlay was applied to the store; locks are released
    Committed,
    /// Overlay was discarded; locks are released; store untouched
    RolledBack,
}

/// A unit of work over a fixed, locked set of keys
///
/// Created by [`Store::begin`]. Holds one lock guard per key for as long
/// as it is pending; the guards are dropped — releasing the keys — on
/// commit, rollback, or drop. Dropping a pending transaction without
/// committing behaves like a rollback: the overlay is discarded and the
/// store is never touched.
pub struct Transaction<'s, K, V> {
    store: &'s Store<K, V>,
    /// Locked keys, sorted and de-duplicated
    keys: Vec<K>,
    guards: Vec<KeyGuard>,
    overlay: HashMap<K, V>,
    status: TransactionStatus,
}

impl<'s, K, V> Transaction<'s, K, V>
where
    K: Ord + Hash + Eq + Clone + Debug,
    V: Clone,
{
    pub(crate) fn new(
        store: &'s Store<K, V>,
        keys: Vec<K>,
        guards: Vec<KeyGuard>,
        overlay: HashMap<K, V>,
    ) -> Self {
        Transaction {
            store,
            keys,
            guards,
            overlay,
            status: TransactionStatus::Pending,
        }
    }

    /// Read a key from the transaction's overlay
    ///
    /// Reflects the snapshot taken at start plus this transaction's own
    /// writes, never concurrent commits — the key's lock guarantees there
    /// are none for keys in the locked set. Returns `None` for keys that
    /// were absent at start and have not been written.
    pub fn get(&self, key: &K) -> Option<V> {
        self.overlay.get(key).cloned()
    }

    /// Write a key into the transaction's overlay
    ///
    /// The write stays private until `commit`. Only keys named at
    /// [`Store::begin`] may be written: anything else would reach the
    /// store at commit without lock protection, so it fails with
    /// [`Error::KeyNotLocked`] instead.
    ///
    /// # Errors
    /// - `KeyNotLocked` if `key` is outside the locked set
    /// - `TransactionCommitted` / `TransactionRolledBack` after the
    ///   transaction has terminated
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        self.ensure_pending()?;

        if self.keys.binary_search(&key).is_err() {
            return Err(Error::KeyNotLocked {
                key: format!("{:?}", key),
            });
        }

        self.overlay.insert(key, value);
        Ok(())
    }

    /// Apply the overlay to the store and release all locks
    ///
    /// Every overlay entry is copied into the authoritative mapping under
    /// the store's exclusive write guard — no reader or writer can observe
    /// a partial set of this transaction's writes. Lock release order is
    /// irrelevant; only acquisition order mattered.
    ///
    /// # Errors
    /// - `TransactionCommitted` if already committed
    /// - `TransactionRolledBack` if already rolled back
    ///
    /// A failed commit from a terminal state changes nothing: the store
    /// was finalized (or left untouched) by the first termination and all
    /// locks were released then.
    pub fn commit(&mut self) -> Result<()> {
        self.ensure_pending()?;
        self.status = TransactionStatus::Committed;

        {
            let mut data = self.store.data.write();
            for (key, value) in self.overlay.drain() {
                data.insert(key, value);
            }
        }
        self.guards.clear();

        tracing::debug!(keys = self.keys.len(), "transaction committed");
        Ok(())
    }

    /// Discard the overlay and release all locks
    ///
    /// The store is never touched. Idempotent: calling it again, or after
    /// a successful commit, is a no-op — safe to call unconditionally as
    /// a cleanup step.
    pub fn rollback(&mut self) {
        if self.status != TransactionStatus::Pending {
            return;
        }
        self.status = TransactionStatus::RolledBack;

        self.overlay.clear();
        self.guards.clear();

        tracing::debug!(keys = self.keys.len(), "transaction rolled back");
    }

    /// Current lifecycle state
    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// True while the transaction holds its locks and accepts operations
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }

    /// True once `commit` has succeeded
    pub fn is_committed(&self) -> bool {
        self.status == TransactionStatus::Committed
    }

    /// True once the transaction was rolled back
    pub fn is_rolled_back(&self) -> bool {
        self.status == TransactionStatus::RolledBack
    }

    /// The locked key set, sorted and de-duplicated
    pub fn locked_keys(&self) -> &[K] {
        &self.keys
    }

    fn ensure_pending(&self) -> Result<()> {
        match self.status {
            TransactionStatus::Pending => Ok(()),
            TransactionStatus::Committed => Err(Error::TransactionCommitted),
            TransactionStatus::RolledBack => Err(Error::TransactionRolledBack),
        }
    }
}
