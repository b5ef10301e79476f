use crate::config::AuthServiceSettings;
use crate::error::ApiError;
use crate::identity::Identity;
use crate::rpc::{RequestExecutor, classify};
use crate::utils::mask_email;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const CHECK_TOKEN_PATH: &str = "/api/auth/check-token";
pub const HASH_PASSWORD_PATH: &str = "/api/auth/hash-password";

/// Email and password as supplied by the inbound caller. Passed through to
/// the auth peer; the password is never logged and never hashed locally.
#[derive(Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Client for the auth peer service.
#[derive(Clone)]
pub struct AuthClient {
    executor: RequestExecutor,
    settings: AuthServiceSettings,
}

impl AuthClient {
    pub fn new(settings: AuthServiceSettings) -> Self {
        Self {
            executor: RequestExecutor::new(),
            settings,
        }
    }

    /// Exchange credentials for an opaque bearer token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        let masked = mask_email(&credentials.email);
        tracing::info!("Trying to login lead with email {}", masked);

        let url = format!("{}{}", self.settings.url, LOGIN_PATH);
        let outcome = self.executor.post(&url, credentials, None).await?;
        let token: String = classify(outcome)?;

        tracing::info!("Lead with email {} logged in", masked);
        Ok(token)
    }

    /// Exchange a bearer token for the caller's identity.
    ///
    /// This is the identity resolver: the token goes out as bearer auth,
    /// not in the body, and any classified failure propagates unchanged in
    /// kind. Called once per inbound request that needs identity, no
    /// caching.
    pub async fn check_token(&self, token: &str) -> Result<Identity, ApiError> {
        tracing::info!("Resolving caller identity against the auth service");

        let url = format!("{}{}", self.settings.url, CHECK_TOKEN_PATH);
        let outcome = self.executor.get(&url, Some(token)).await?;
        let identity: Identity = classify(outcome)?;

        tracing::info!(
            "Caller identity resolved for lead id {:?}, role {:?}",
            identity.lead_id,
            identity.role
        );
        Ok(identity)
    }

    /// Delegate password hashing to the auth peer and return the hash.
    pub async fn hash_password(&self, plaintext: &str) -> Result<String, ApiError> {
        tracing::info!("Requesting password hash from the auth service");

        let url = format!("{}{}", self.settings.url, HASH_PASSWORD_PATH);
        let body = serde_json::json!({ "password": plaintext });
        let outcome = self.executor.post(&url, &body, None).await?;
        let hash: String = classify(outcome)?;

        tracing::info!("Password hash received from the auth service");
        Ok(hash)
    }
}
