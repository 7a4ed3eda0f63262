//! Concurrency layer for till
//!
//! This crate implements the per-key lock registry:
//! - LockTable: one exclusive lock per key, created lazily, never removed
//! - KeyGuard: owned guard released on drop
//!
//! The registry serializes all writers touching a key, transactional or
//! direct. Deadlock avoidance is the caller's concern: multi-key holders
//! must acquire their locks in a single global order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lock_table;

pub use lock_table::{KeyGuard, LockTable};
