pub mod error;
pub mod transfer;

// Re-export commonly used types
pub use error::TransferError;
pub use transfer::TransferCoordinator;
