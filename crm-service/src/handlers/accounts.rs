use crate::dtos::{BalanceQuery, BalanceResponse};
use crate::handlers::LEAD_ROLES;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use crm_core::error::ApiError;
use crm_core::gate::{AccessScope, INVALID_TOKEN_MESSAGE, bearer_token};
use http::HeaderMap;
use validator::Validate;

/// Aggregate balance for the caller's own lead, in the requested currency.
pub async fn balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    query.validate()?;

    let identity = state
        .gate
        .authorize(&headers, AccessScope::Roles(LEAD_ROLES))
        .await?;
    let lead_id = identity
        .lead_id
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let balance = state
        .transactions
        .get_balance(&[lead_id], &query.currency, token)
        .await?;

    Ok(Json(BalanceResponse {
        balance,
        currency: query.currency,
    }))
}

/// Transaction listing for one account, passed through opaquely from the
/// transaction store.
pub async fn transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(account_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .gate
        .authorize(&headers, AccessScope::Roles(LEAD_ROLES))
        .await?;

    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string()))?;

    let listing = state
        .transactions
        .get_transactions(account_id, token)
        .await?;

    Ok(Json(listing))
}
