//! Shared types for the till workspace
//!
//! This crate holds the pieces every other crate needs: the error
//! taxonomy for store and transaction operations, and the account-name
//! normalization helpers used by the ledger layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;

pub use error::{Error, Result};
pub use key::{normalize_name, validate_name, KeyError};
