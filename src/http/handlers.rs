use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::Account;
use crate::notify::NotificationSink;
use crate::service::LedgerService;

/// Request body for `POST /v1/accounts`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: String,
    pub balance: Decimal,
}

/// Response body for account endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: String,
    pub balance: Decimal,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id().to_string(),
            balance: account.balance(),
        }
    }
}

/// Request body for `POST /v1/accounts/transfer`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub transfer_amount: Decimal,
}

/// Response body for a completed transfer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub from_account_id: String,
    pub to_account_id: String,
    pub transfer_amount: Decimal,
}

/// `POST /v1/accounts` — create an account, 201 on success
pub async fn create_account<N: NotificationSink>(
    State(service): State<Arc<LedgerService<N>>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = service.create_account(&request.account_id, request.balance)?;
    Ok((StatusCode::CREATED, Json(account.as_ref().into())))
}

/// `GET /v1/accounts/{id}` — fetch an account by identifier
pub async fn get_account<N: NotificationSink>(
    State(service): State<Arc<LedgerService<N>>>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = service.get_account(&account_id)?;
    Ok(Json(account.as_ref().into()))
}

/// `POST /v1/accounts/transfer` — move money between two accounts
pub async fn transfer<N: NotificationSink>(
    State(service): State<Arc<LedgerService<N>>>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    service.transfer_money(
        &request.from_account_id,
        &request.to_account_id,
        request.transfer_amount,
    )?;

    Ok(Json(TransferResponse {
        from_account_id: request.from_account_id,
        to_account_id: request.to_account_id,
        transfer_amount: request.transfer_amount,
    }))
}
