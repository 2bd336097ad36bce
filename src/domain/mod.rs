pub mod account;
pub mod error;

// Re-export commonly used types
pub use account::Account;
pub use error::DomainError;
