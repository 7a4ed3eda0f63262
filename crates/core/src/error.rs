//! Error types for store and transaction operations
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Key absence is deliberately not represented here: reads return
//! `Option` and a missing key is a normal negative result, not an error.
//! Every variant below is a caller-protocol violation; none of them
//! leaves the store partially modified.

use thiserror::Error;

/// Result type alias for store and transaction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the store and its transactions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Terminal operation on a transaction that already committed
    #[error("transaction already committed")]
    TransactionCommitted,

    /// Terminal operation on a transaction that was already rolled back
    #[error("transaction already rolled back")]
    TransactionRolledBack,

    /// Write to a key outside the transaction's locked set
    ///
    /// Such a write would reach the store at commit time without ever
    /// having been protected by the key's lock, so it is rejected at the
    /// write call instead.
    #[error("key {key} is not part of the transaction's lock set")]
    KeyNotLocked {
        /// Debug rendering of the offending key
        key: String,
    },
}
