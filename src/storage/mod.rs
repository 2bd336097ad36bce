pub mod accounts;
pub mod error;

// Re-export commonly used types
pub use accounts::AccountStore;
pub use error::StorageError;
