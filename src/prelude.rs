//! Prelude module for convenient imports
//!
//! Import everything you need with: `use ledgerd::prelude::*;`

// Domain types
pub use crate::domain::{Account, DomainError};

// Storage types
pub use crate::storage::{AccountStore, StorageError};

// Engine types
pub use crate::engine::{TransferCoordinator, TransferError};

// Notification types
pub use crate::notify::{LogNotificationSink, NotificationSink};

// Service types
pub use crate::service::{LedgerService, ServiceError};

// App types
pub use crate::config::{Config, ConfigError};
