//! Ledger operations over the transactional store

use crate::account::Account;
use crate::error::{LedgerError, Result};
use till_core::{normalize_name, validate_name};
use till_storage::Store;

/// A balance ledger of named accounts
///
/// Every operation normalizes the account name (trim + lower-case) before
/// it becomes a store key, so `"Mark"`, `" mark "` and `"MARK"` address
/// the same account. Multi-account operations run inside a store
/// transaction: either every write commits or none does, and rejections
/// never reach the store.
///
/// # Example
///
/// ```
/// use till_ledger::Ledger;
///
/// let ledger = Ledger::with_accounts([("Mark", 100), ("Jane", 30)]);
/// ledger.transfer("mark", "jane", 25).unwrap();
///
/// assert_eq!(ledger.balance_of("Mark").unwrap().balance, 75);
/// assert_eq!(ledger.balance_of("jane").unwrap().balance, 55);
/// ```
pub struct Ledger {
    store: Store<String, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            store: Store::new(),
        }
    }

    /// Create a ledger pre-seeded with `(name, balance)` pairs
    ///
    /// Seeding writes directly, bypassing the create checks; later pairs
    /// overwrite earlier ones with the same normalized name. Intended for
    /// startup data and test fixtures.
    pub fn with_accounts<N>(accounts: impl IntoIterator<Item = (N, i64)>) -> Self
    where
        N: Into<String>,
    {
        let ledger = Ledger::new();
        for (name, balance) in accounts {
            let name = name.into();
            let key = normalize_name(&name);
            ledger.store.put(key, Account::new(name, balance));
        }
        ledger
    }

    /// Create a new account holding `initial_balance`
    ///
    /// The display name keeps the supplied casing (trimmed); the store key
    /// is the normalized form.
    ///
    /// # Errors
    /// - `InvalidName` if the name fails validation
    /// - `InsufficientFunds` if `initial_balance` is negative
    /// - `AccountExists` if the name already has an account
    pub fn create_account(&self, name: &str, initial_balance: i64) -> Result<()> {
        let key = self.key_for(name)?;
        if initial_balance < 0 {
            return Err(LedgerError::InsufficientFunds {
                balance: 0,
                requested: -initial_balance,
            });
        }

        self.store.transact([key.clone()], |txn| {
            if txn.get(&key).is_some() {
                return Err(LedgerError::AccountExists);
            }
            txn.put(key.clone(), Account::new(name.trim(), initial_balance))?;
            Ok(())
        })?;

        tracing::debug!(account = %key, balance = initial_balance, "account created");
        Ok(())
    }

    /// Read an account's current committed state
    ///
    /// A plain store read: never blocks behind in-flight transactions.
    ///
    /// # Errors
    /// - `InvalidName` if the name fails validation
    /// - `AccountNotFound` if no account has this name
    pub fn balance_of(&self, name: &str) -> Result<Account> {
        let key = self.key_for(name)?;
        self.store.get(&key).ok_or(LedgerError::AccountNotFound)
    }

    /// Add `delta` (which may be negative) to an account's balance
    ///
    /// Returns the new balance. The check and the write happen inside one
    /// transaction, so a concurrent adjustment cannot slip between them.
    ///
    /// # Errors
    /// - `InvalidName` if the name fails validation
    /// - `AccountNotFound` if no account has this name
    /// - `InsufficientFunds` if the result would drop below zero
    pub fn adjust_balance(&self, name: &str, delta: i64) -> Result<i64> {
        let key = self.key_for(name)?;

        let new_balance = self.store.transact([key.clone()], |txn| {
            let account = txn.get(&key).ok_or(LedgerError::AccountNotFound)?;
            let new_balance = account.balance + delta;
            if new_balance < 0 {
                return Err(LedgerError::InsufficientFunds {
                    balance: account.balance,
                    requested: -delta,
                });
            }
            txn.put(key.clone(), Account::new(account.name, new_balance))?;
            Ok(new_balance)
        })?;

        tracing::debug!(account = %key, delta, new_balance, "balance adjusted");
        Ok(new_balance)
    }

    /// Move `amount` units from `sender` to `receiver` atomically
    ///
    /// Both accounts are locked for the duration (in sorted key order, so
    /// opposing transfers cannot deadlock) and both writes land in one
    /// commit — no observer ever sees the debit without the credit.
    ///
    /// # Errors
    /// - `InvalidName` if either name fails validation
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `SelfTransfer` if both names normalize to the same account
    /// - `AccountNotFound` if either account is missing
    /// - `InsufficientFunds` if the sender cannot cover `amount`
    pub fn transfer(&self, sender: &str, receiver: &str, amount: i64) -> Result<()> {
        let sender_key = self.key_for(sender)?;
        let receiver_key = self.key_for(receiver)?;

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if sender_key == receiver_key {
            return Err(LedgerError::SelfTransfer);
        }

        self.store
            .transact([sender_key.clone(), receiver_key.clone()], |txn| {
                let from = txn.get(&sender_key).ok_or(LedgerError::AccountNotFound)?;
                let to = txn.get(&receiver_key).ok_or(LedgerError::AccountNotFound)?;

                let remaining = from.balance - amount;
                if remaining < 0 {
                    return Err(LedgerError::InsufficientFunds {
                        balance: from.balance,
                        requested: amount,
                    });
                }

                txn.put(sender_key.clone(), Account::new(from.name, remaining))?;
                txn.put(receiver_key.clone(), Account::new(to.name, to.balance + amount))?;
                Ok(())
            })?;

        tracing::debug!(
            sender = %sender_key,
            receiver = %receiver_key,
            amount,
            "transfer committed"
        );
        Ok(())
    }

    /// Copy out every account, sorted by store key
    pub fn accounts(&self) -> Vec<Account> {
        let mut entries = self.store.entries();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, account)| account).collect()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no account exists
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn key_for(&self, name: &str) -> Result<String> {
        let key = normalize_name(name);
        validate_name(&key)?;
        Ok(key)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
