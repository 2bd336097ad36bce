//! HTTP interface for the ledger service.
//!
//! Thin request-handling layer over [`LedgerService`]: routing, JSON
//! (de)serialization, and the error-to-status mapping. All ledger semantics
//! live below this layer.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::notify::NotificationSink;
use crate::service::LedgerService;

// Re-export commonly used types
pub use error::ApiError;
pub use handlers::{AccountResponse, CreateAccountRequest, TransferRequest, TransferResponse};

/// Build the application router
pub fn router<N: NotificationSink + 'static>(service: Arc<LedgerService<N>>) -> Router {
    Router::new()
        .route("/v1/accounts", post(handlers::create_account::<N>))
        .route("/v1/accounts/{id}", get(handlers::get_account::<N>))
        .route("/v1/accounts/transfer", post(handlers::transfer::<N>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
