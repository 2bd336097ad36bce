use rust_decimal::Decimal;
use tracing::debug;

use super::error::TransferError;
use crate::domain::Account;
use crate::notify::NotificationSink;

/// Coordinator for the atomic debit/credit pair between two accounts.
///
/// Two concurrent transfers may want the same pair of accounts in opposite
/// roles (A→B and B→A). Locking in request order would let each hold one
/// account while waiting for the other. The coordinator instead acquires the
/// two mutexes in ascending identifier order, independent of transfer
/// direction, so every transfer touching a given pair contends on the same
/// first lock. Transfers on disjoint pairs run fully in parallel.
pub struct TransferCoordinator<N: NotificationSink> {
    notifier: N,
}

impl<N: NotificationSink> TransferCoordinator<N> {
    /// Create a coordinator that reports completed transfers to `notifier`
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// On any error the balances are left unchanged. On success both parties
    /// are notified after both locks have been released, so the sink can
    /// neither deadlock against the protocol nor block other transfers.
    pub fn transfer(
        &self,
        from: &Account,
        to: &Account,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        // Preconditions, checked before any lock is taken
        if from.id() == to.id() {
            return Err(TransferError::SelfTransfer(from.id().to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount(amount));
        }

        debug!(from = from.id(), to = to.id(), %amount, "Processing transfer");

        // Fixed global lock order: ascending account identifier
        let (first, second) = if from.id() < to.id() {
            (from, to)
        } else {
            (to, from)
        };

        let mut first_guard = first.lock_balance();
        let mut second_guard = second.lock_balance();

        let (from_balance, to_balance) = if first.id() == from.id() {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };

        // Re-validate with both locks held
        if *from_balance < amount {
            // Early return releases both guards with state untouched
            return Err(TransferError::InsufficientBalance {
                account: from.id().to_string(),
                balance: *from_balance,
                amount,
            });
        }

        let debited = from_balance
            .checked_sub(amount)
            .ok_or(TransferError::Overflow)?;
        let credited = to_balance
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        // The atomic unit: both assignments happen while both mutexes are
        // continuously held, so no other transfer can observe the debit
        // without the credit.
        *from_balance = debited;
        *to_balance = credited;

        // Release in reverse acquisition order
        drop(second_guard);
        drop(first_guard);

        self.notifier.notify(
            from,
            &format!("{amount} has been debited from account {}", from.id()),
        );
        self.notifier.notify(
            to,
            &format!("{amount} has been credited to account {}", to.id()),
        );

        Ok(())
    }
}
