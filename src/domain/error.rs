use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-level errors representing argument validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Account id must not be empty")]
    EmptyAccountId,

    #[error("Initial balance must not be negative: {0}")]
    NegativeInitialBalance(Decimal),
}
