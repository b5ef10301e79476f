use crate::dtos::{DepositRequest, TransactionResponse, TransferRequest, WithdrawRequest};
use crate::handlers::LEAD_ROLES;
use crate::startup::AppState;
use axum::{Json, extract::State};
use crm_core::clients::transaction::{DEPOSIT_PATH, TRANSFER_PATH, WITHDRAW_PATH};
use crm_core::error::ApiError;
use crm_core::gate::{AccessScope, INVALID_TOKEN_MESSAGE, bearer_token};
use http::HeaderMap;
use rust_decimal::Decimal;
use serde_json::json;
use validator::Validate;

fn ensure_positive_amount(amount: Decimal) -> Result<(), ApiError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Transaction amount must be positive".to_string(),
        ))
    }
}

pub async fn deposit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DepositRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    request.validate()?;
    ensure_positive_amount(request.amount)?;

    let identity = state
        .gate
        .authorize(&headers, AccessScope::Roles(LEAD_ROLES))
        .await?;
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let body = json!({
        "lead_id": identity.lead_id,
        "account_id": request.account_id,
        "amount": request.amount,
        "currency": request.currency,
    });
    let transaction_id: i64 = state
        .transactions
        .post_transaction(DEPOSIT_PATH, &body, token)
        .await?;

    Ok(Json(TransactionResponse { transaction_id }))
}

pub async fn withdraw(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<WithdrawRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    request.validate()?;
    ensure_positive_amount(request.amount)?;

    let identity = state
        .gate
        .authorize(&headers, AccessScope::Roles(LEAD_ROLES))
        .await?;
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let body = json!({
        "lead_id": identity.lead_id,
        "account_id": request.account_id,
        "amount": request.amount,
        "currency": request.currency,
    });
    let transaction_id: i64 = state
        .transactions
        .post_transaction(WITHDRAW_PATH, &body, token)
        .await?;

    Ok(Json(TransactionResponse { transaction_id }))
}

pub async fn transfer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    request.validate()?;
    ensure_positive_amount(request.amount)?;

    let identity = state
        .gate
        .authorize(&headers, AccessScope::Roles(LEAD_ROLES))
        .await?;
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let body = json!({
        "lead_id": identity.lead_id,
        "from_account_id": request.from_account_id,
        "to_account_id": request.to_account_id,
        "amount": request.amount,
        "currency": request.currency,
    });
    let transaction_id: i64 = state
        .transactions
        .post_transaction(TRANSFER_PATH, &body, token)
        .await?;

    Ok(Json(TransactionResponse { transaction_id }))
}
