use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

/// A named balance record subject to concurrent transfer operations.
///
/// The balance is guarded by the account's own mutex, which doubles as the
/// transfer lock: any transfer touching this account must hold it for the
/// whole debit/credit critical section. The lock never crosses the crate
/// boundary; callers outside the engine only see [`Account::balance`].
#[derive(Debug)]
pub struct Account {
    id: String,
    balance: Mutex<Decimal>,
}

impl Account {
    /// Create an account with the given identifier and starting balance
    pub fn new(id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: Mutex::new(balance),
        }
    }

    /// Get the account identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read the current balance (takes the account lock briefly)
    pub fn balance(&self) -> Decimal {
        *self.lock_balance()
    }

    /// Acquire the account's balance lock.
    ///
    /// A poisoned mutex is recovered: the balance is written by single
    /// assignments, so a panicking holder cannot leave a torn value.
    pub(crate) fn lock_balance(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_account_exposes_id_and_balance() {
        let account = Account::new("Id-123", dec!(100.50));

        assert_eq!(account.id(), "Id-123");
        assert_eq!(account.balance(), dec!(100.50));
    }

    #[test]
    fn zero_balance_account() {
        let account = Account::new("Id-1", Decimal::ZERO);
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn balance_reflects_mutation_under_lock() {
        let account = Account::new("Id-1", dec!(10));

        {
            let mut guard = account.lock_balance();
            *guard += dec!(5);
        }

        assert_eq!(account.balance(), dec!(15));
    }

    #[test]
    fn balance_read_does_not_hold_the_lock() {
        let account = Account::new("Id-1", dec!(1));

        // A second read must not block on the first
        let a = account.balance();
        let b = account.balance();
        assert_eq!(a, b);
    }

    #[test]
    fn lock_is_exclusive_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let account = Arc::new(Account::new("Id-1", Decimal::ZERO));
        let mut handles = Vec::new();

        for _ in 0..4 {
            let account = Arc::clone(&account);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    let mut guard = account.lock_balance();
                    *guard += Decimal::ONE;
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // No lost updates under contention
        assert_eq!(account.balance(), dec!(4000));
    }
}
