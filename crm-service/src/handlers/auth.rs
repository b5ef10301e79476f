use crate::dtos::{LoginRequest, LoginResponse};
use crate::startup::AppState;
use axum::{Json, extract::State};
use crm_core::clients::LoginCredentials;
use crm_core::error::ApiError;
use validator::Validate;

/// Exchange email and password for a bearer token issued by the auth peer.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let token = state
        .auth
        .login(&LoginCredentials {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(LoginResponse { token }))
}
