use std::sync::Arc;

use dashmap::{DashMap, Entry};
use rust_decimal::Decimal;

use super::error::StorageError;
use crate::domain::Account;

/// Concurrent in-memory account store using DashMap.
///
/// The store owns all account records; callers receive shared `Arc` handles,
/// never copies, so balance mutations are visible to every holder. Creation
/// is the only insertion path and there is no deletion, so lookups never
/// need to coordinate with the transfer protocol.
pub struct AccountStore {
    accounts: DashMap<String, Arc<Account>>,
}

impl AccountStore {
    /// Create a new empty account store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Create an account with the given identifier and initial balance.
    ///
    /// The DashMap entry API makes the check-and-insert atomic: of two
    /// racing creates for the same id, exactly one wins and the other
    /// observes [`StorageError::DuplicateAccount`] with existing state
    /// untouched.
    pub fn create(
        &self,
        id: &str,
        initial_balance: Decimal,
    ) -> Result<Arc<Account>, StorageError> {
        match self.accounts.entry(id.to_string()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateAccount(id.to_string())),
            Entry::Vacant(entry) => {
                let account = Arc::new(Account::new(id, initial_balance));
                entry.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    /// Look up an account by identifier
    pub fn get(&self, id: &str) -> Result<Arc<Account>, StorageError> {
        self.accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
