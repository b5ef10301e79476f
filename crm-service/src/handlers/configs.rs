use crate::config::{CRM_CONFIG_PATH, RemoteSettings};
use crate::handlers::CONFIG_ISSUERS;
use crate::startup::AppState;
use axum::extract::State;
use crm_core::error::ApiError;
use crm_core::gate::AccessScope;
use http::{HeaderMap, StatusCode};

/// Service-to-service hook: the configuration peer announces changed
/// settings and we re-read them.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state
        .gate
        .authorize(&headers, AccessScope::Microservices(CONFIG_ISSUERS))
        .await?;

    if let Some(configs) = &state.configs {
        let remote: RemoteSettings = configs.fetch_configuration(CRM_CONFIG_PATH).await?;
        tracing::info!(
            "Configuration refreshed: auth override {:?}, transaction override {:?}",
            remote.auth_service_url,
            remote.transaction_service_url
        );
    } else {
        tracing::info!("Configuration refresh requested but no config service is set up");
    }

    Ok(StatusCode::NO_CONTENT)
}
