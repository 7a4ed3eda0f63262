//! The authoritative key-value store
//!
//! `Store` owns two pieces of shared state: the authoritative mapping
//! behind a read-write guard, and the per-key lock table that serializes
//! writers. Values are copied on every read and write — the store's copy,
//! a transaction's overlay copy, and the copy handed to a caller never
//! alias.
//!
//! Keys must carry a total order (`Ord`): it is the deadlock-avoidance
//! mechanism. Every multi-key transaction sorts its key set and acquires
//! locks in that order, so no two transactions can each hold part of the
//! other's key set and wait on the rest.

use crate::transaction::Transaction;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use till_concurrency::LockTable;
use till_core::Error;

/// Concurrency-safe in-memory key-value store with multi-key transactions
///
/// The lock table is owned by the store instance, not shared process-wide:
/// independent stores (one per test, say) never contend with each other.
///
/// # Example
///
/// ```
/// use till_storage::Store;
///
/// let store: Store<String, i64> = Store::new();
/// store.put("mark".to_string(), 100);
///
/// let mut txn = store.begin(["mark".to_string(), "jane".to_string()]);
/// let balance = txn.get(&"mark".to_string()).unwrap();
/// txn.put("mark".to_string(), balance - 1).unwrap();
/// txn.put("jane".to_string(), 1).unwrap();
/// txn.commit().unwrap();
///
/// assert_eq!(store.get(&"mark".to_string()), Some(99));
/// assert_eq!(store.get(&"jane".to_string()), Some(1));
/// ```
pub struct Store<K, V> {
    pub(crate) data: RwLock<HashMap<K, V>>,
    pub(crate) locks: LockTable<K>,
}

impl<K, V> Store<K, V>
where
    K: Ord + Hash + Eq + Clone + Debug,
    V: Clone,
{
    /// Create an empty store
    pub fn new() -> Self {
        Store {
            data: RwLock::new(HashMap::new()),
            locks: LockTable::new(),
        }
    }

    /// Read a key's committed value
    ///
    /// Takes only the shared read guard — never a per-key lock — so reads
    /// do not block behind in-flight transactions. Returns `None` if the
    /// key is absent.
    pub fn get(&self, key: &K) -> Option<V> {
        self.data.read().get(key).cloned()
    }

    /// Write a single key outside any transaction
    ///
    /// Takes the key's exclusive lock first, so a direct write blocks
    /// until no transaction holds the key, then briefly takes the write
    /// guard on the mapping.
    pub fn put(&self, key: K, value: V) {
        let _guard = self.locks.acquire(&key);
        self.data.write().insert(key, value);
    }

    /// Start a transaction over `keys`
    ///
    /// The key set is de-duplicated and sorted; locks are acquired in
    /// sorted order, blocking on each until it is free. Current committed
    /// values of the locked keys are copied into the transaction's
    /// overlay (absent keys leave no entry). The returned transaction is
    /// `Pending` and holds its locks until `commit`, `rollback`, or drop.
    ///
    /// This call has no timeout: it may block for as long as another
    /// holder keeps one of the keys. Callers that need bounded waiting
    /// must wrap it externally.
    pub fn begin(&self, keys: impl IntoIterator<Item = K>) -> Transaction<'_, K, V> {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        let mut overlay = HashMap::with_capacity(keys.len());
        for key in &keys {
            guards.push(self.locks.acquire(key));
            if let Some(value) = self.get(key) {
                overlay.insert(key.clone(), value);
            }
        }

        tracing::debug!(keys = keys.len(), "transaction started");
        Transaction::new(self, keys, guards, overlay)
    }

    /// Run `op` inside a transaction over `keys`
    ///
    /// Commits when `op` returns `Ok`, rolls back when it returns `Err`.
    /// Sugar over [`begin`](Store::begin) for the common
    /// read-check-write-commit shape.
    ///
    /// # Example
    ///
    /// ```
    /// use till_storage::Store;
    /// use till_core::Error;
    ///
    /// let store: Store<String, i64> = Store::new();
    /// store.put("mark".to_string(), 100);
    ///
    /// let debited: Result<i64, Error> = store.transact(["mark".to_string()], |txn| {
    ///     let balance = txn.get(&"mark".to_string()).unwrap_or(0);
    ///     txn.put("mark".to_string(), balance - 30)?;
    ///     Ok(balance - 30)
    /// });
    /// assert_eq!(debited.unwrap(), 70);
    /// ```
    pub fn transact<T, E, F>(
        &self,
        keys: impl IntoIterator<Item = K>,
        op: F,
    ) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Transaction<'_, K, V>) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let mut txn = self.begin(keys);
        match op(&mut txn) {
            Ok(out) => {
                txn.commit()?;
                Ok(out)
            }
            Err(err) => {
                txn.rollback();
                Err(err)
            }
        }
    }

    /// Number of committed keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True if no key has been committed
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Copy out every committed entry
    ///
    /// A point-in-time copy taken under the shared read guard; useful for
    /// listings and assertions, not a consistent cursor.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.data
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> Default for Store<K, V>
where
    K: Ord + Hash + Eq + Clone + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
