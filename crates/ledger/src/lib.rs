//! Balance ledger over the till store
//!
//! A typed application layer for named accounts: create, read, adjust
//! with a non-negativity floor, and atomic transfer between two accounts.
//! Account names are normalized (trimmed, lower-cased) before they become
//! store keys, so lookups are case-insensitive.
//!
//! This crate is the seam an outer transport layer would call into; it
//! carries no transport concepts itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod error;
pub mod ledger;

pub use account::Account;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
