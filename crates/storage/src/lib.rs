//! Storage layer for till
//!
//! This crate implements the transactional in-memory store:
//! - Store: the authoritative key-value mapping plus its lock registry
//! - Transaction: a bounded unit of work over a fixed, locked key set
//!
//! All mutation goes through `Store::put` or `Transaction::commit`, both
//! of which hold the store's exclusive write guard; readers take only a
//! shared guard. Multi-key transactions acquire their per-key locks in
//! sorted key order, which makes circular wait — and therefore deadlock —
//! structurally impossible for any mix of concurrent transactions and
//! direct writes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;
pub mod transaction;

pub use store::Store;
pub use transaction::{Transaction, TransactionStatus};
