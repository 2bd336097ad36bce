use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Account, DomainError};
use crate::engine::{TransferCoordinator, TransferError};
use crate::notify::NotificationSink;
use crate::storage::{AccountStore, StorageError};

/// Errors surfaced by the ledger service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}

/// Facade tying the account store and the transfer coordinator together.
///
/// This is the whole contract the request-handling layer consumes: account
/// creation, lookup, and money transfer. Resolving account identifiers is
/// this layer's job; the coordinator only ever sees resolved records.
pub struct LedgerService<N: NotificationSink> {
    store: AccountStore,
    coordinator: TransferCoordinator<N>,
}

impl<N: NotificationSink> LedgerService<N> {
    /// Create a service with an empty store
    pub fn new(notifier: N) -> Self {
        Self {
            store: AccountStore::new(),
            coordinator: TransferCoordinator::new(notifier),
        }
    }

    /// Create an account. The id must be non-blank and the initial balance
    /// non-negative; a duplicate id fails without mutating existing state.
    pub fn create_account(
        &self,
        id: &str,
        initial_balance: Decimal,
    ) -> Result<Arc<Account>, ServiceError> {
        if id.trim().is_empty() {
            return Err(DomainError::EmptyAccountId.into());
        }
        if initial_balance < Decimal::ZERO {
            return Err(DomainError::NegativeInitialBalance(initial_balance).into());
        }

        debug!(account_id = id, %initial_balance, "Creating account");
        Ok(self.store.create(id, initial_balance)?)
    }

    /// Look up an account by identifier
    pub fn get_account(&self, id: &str) -> Result<Arc<Account>, ServiceError> {
        Ok(self.store.get(id)?)
    }

    /// Transfer `amount` from one account to another.
    ///
    /// Both identifiers must resolve; the coordinator enforces the remaining
    /// preconditions and runs the locking protocol.
    pub fn transfer_money(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<(), ServiceError> {
        let from = self.store.get(from_id)?;
        let to = self.store.get(to_id)?;

        self.coordinator.transfer(&from, &to, amount)?;
        Ok(())
    }

    /// Access the underlying account store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }
}
