use rust_decimal::Decimal;
use thiserror::Error;

/// Engine-level errors for the transfer protocol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Cannot transfer to the same account: {0}")]
    SelfTransfer(String),

    #[error("Transfer amount must be positive: {0}")]
    NonPositiveAmount(Decimal),

    #[error("Insufficient balance on account {account}: {balance} available, {amount} requested")]
    InsufficientBalance {
        account: String,
        balance: Decimal,
        amount: Decimal,
    },

    #[error("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            TransferError::SelfTransfer("Id-123".into()).to_string(),
            "Cannot transfer to the same account: Id-123"
        );
        assert_eq!(
            TransferError::NonPositiveAmount(dec!(0)).to_string(),
            "Transfer amount must be positive: 0"
        );
        assert_eq!(
            TransferError::InsufficientBalance {
                account: "A".into(),
                balance: dec!(100),
                amount: dec!(150),
            }
            .to_string(),
            "Insufficient balance on account A: 100 available, 150 requested"
        );
        assert_eq!(TransferError::Overflow.to_string(), "Arithmetic overflow");
    }
}
