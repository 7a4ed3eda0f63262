//! The account record

use serde::{Deserialize, Serialize};

/// A named account and its current balance
///
/// `name` keeps the casing supplied at creation for display; the store
/// key is the normalized form. Balances are signed so arithmetic can be
/// checked before the floor is enforced, but no committed account ever
/// holds a negative balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name as supplied at creation
    pub name: String,
    /// Current balance in whole units
    pub balance: i64,
}

impl Account {
    /// Create an account record
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Account {
            name: name.into(),
            balance,
        }
    }
}
