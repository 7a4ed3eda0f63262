//! Ledger operation errors

use thiserror::Error;
use till_core::KeyError;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors surfaced by ledger operations
///
/// Every variant is a clean rejection: the operation either commits in
/// full or leaves the underlying store exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Create on a name that already has an account
    #[error("account already exists")]
    AccountExists,

    /// Operation on a name with no account
    #[error("account not found")]
    AccountNotFound,

    /// Operation would drop a balance below zero
    #[error("insufficient funds: balance {balance} cannot cover {requested}")]
    InsufficientFunds {
        /// Balance the account held when the operation was evaluated
        balance: i64,
        /// Units the operation tried to remove
        requested: i64,
    },

    /// Sender and receiver normalize to the same account
    #[error("cannot transfer to the same account")]
    SelfTransfer,

    /// Transfer amount is zero or negative
    #[error("transfer amount must be positive")]
    InvalidAmount,

    /// Account name failed validation
    #[error("invalid account name: {0}")]
    InvalidName(#[from] KeyError),

    /// Store protocol violation bubbled up from the transaction layer
    #[error("store error: {0}")]
    Store(#[from] till_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LedgerError::AccountExists.to_string(),
            "account already exists"
        );
        assert_eq!(
            LedgerError::InsufficientFunds {
                balance: 30,
                requested: 31
            }
            .to_string(),
            "insufficient funds: balance 30 cannot cover 31"
        );
    }

    #[test]
    fn test_key_error_converts() {
        let err: LedgerError = KeyError::Empty.into();
        assert!(matches!(err, LedgerError::InvalidName(KeyError::Empty)));
    }

    #[test]
    fn test_store_error_converts() {
        let err: LedgerError = till_core::Error::TransactionCommitted.into();
        assert!(matches!(err, LedgerError::Store(_)));
    }
}
