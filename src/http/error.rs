use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::engine::TransferError;
use crate::service::ServiceError;
use crate::storage::StorageError;

/// HTTP-facing wrapper mapping [`ServiceError`] to a status code and a JSON
/// body of the form `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.0 {
            ServiceError::Domain(err) => (StatusCode::BAD_REQUEST, "invalid_request", err.to_string()),
            ServiceError::Storage(err) => {
                let (status, code) = match err {
                    StorageError::DuplicateAccount(_) => (StatusCode::BAD_REQUEST, "duplicate_account"),
                    StorageError::NotFound(_) => (StatusCode::NOT_FOUND, "account_not_found"),
                };
                (status, code, err.to_string())
            }
            ServiceError::Transfer(err) => {
                let (status, code) = match err {
                    TransferError::InsufficientBalance { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_balance")
                    }
                    TransferError::Overflow => (StatusCode::UNPROCESSABLE_ENTITY, "amount_overflow"),
                    TransferError::SelfTransfer(_) | TransferError::NonPositiveAmount(_) => {
                        (StatusCode::BAD_REQUEST, "invalid_transfer")
                    }
                };
                (status, code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
