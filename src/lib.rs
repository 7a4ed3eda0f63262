//! tilldb — in-memory key-value store with multi-key locking transactions
//!
//! The store keeps an authoritative key→value mapping guarded by per-key
//! exclusive locks. A transaction locks its whole key set up front, in
//! sorted key order so overlapping transactions can never deadlock, works
//! against a private overlay, and applies every write in one atomic
//! commit.
//!
//! # Quick Start
//!
//! ```
//! use tilldb::Store;
//!
//! let store: Store<String, i64> = Store::new();
//! store.put("mark".to_string(), 100);
//! store.put("jane".to_string(), 30);
//!
//! // Move one unit atomically
//! let mut txn = store.begin(["mark".to_string(), "jane".to_string()]);
//! let mark = txn.get(&"mark".to_string()).unwrap();
//! let jane = txn.get(&"jane".to_string()).unwrap();
//! txn.put("mark".to_string(), mark - 1).unwrap();
//! txn.put("jane".to_string(), jane + 1).unwrap();
//! txn.commit().unwrap();
//!
//! assert_eq!(store.get(&"mark".to_string()), Some(99));
//! assert_eq!(store.get(&"jane".to_string()), Some(31));
//! ```
//!
//! # Architecture
//!
//! - [`LockTable`] hands out one exclusive lock per key, created lazily
//!   and never removed.
//! - [`Store`] owns the authoritative mapping and its lock table, and is
//!   the only way to start a [`Transaction`].
//! - [`Ledger`] is the balance application built on the store: named
//!   accounts with atomic transfers and a non-negativity floor.

pub use till_concurrency::{KeyGuard, LockTable};
pub use till_core::{key, normalize_name, validate_name, Error, KeyError, Result};
pub use till_ledger::{Account, Ledger, LedgerError};
pub use till_storage::{Store, Transaction, TransactionStatus};
