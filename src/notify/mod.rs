use tracing::info;

use crate::domain::Account;

/// Collaborator informing account holders of completed transfers.
///
/// Fire-and-forget by contract: the signature cannot fail, so a sink can
/// never convert a completed transfer into a reported failure. The engine
/// only calls it after both account locks have been released, so a slow sink
/// cannot extend lock hold time either.
pub trait NotificationSink: Send + Sync {
    /// Notify the holder of `account` about a completed transfer
    fn notify(&self, account: &Account, message: &str);
}

impl<N: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<N> {
    fn notify(&self, account: &Account, message: &str) {
        (**self).notify(account, message);
    }
}

/// Notification sink that emits structured log events.
///
/// Stands in for an outbound channel (email, push) owned by another team.
#[derive(Debug, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, account: &Account, message: &str) {
        info!(account_id = account.id(), notification = message, "Transfer notification");
    }
}
