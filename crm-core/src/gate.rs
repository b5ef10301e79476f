use crate::clients::AuthClient;
use crate::error::ApiError;
use crate::identity::{Identity, Role};
use http::{HeaderMap, header};
use std::sync::Arc;

pub const ANONYMOUS_MESSAGE: &str = "Anonymous doesn't have access to this endpoint";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// What a protected operation accepts: an allow-list of lead roles, or an
/// allow-list of issuing microservices for service-to-service endpoints.
/// Supplied explicitly at each call site, never hard-coded in the gate.
#[derive(Debug, Clone, Copy)]
pub enum AccessScope<'a> {
    Roles(&'a [Role]),
    Microservices(&'a [&'a str]),
}

/// Extract the bearer token from inbound request headers. A purely local
/// check: no network call happens before this returns `Some`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// The authorization gate every protected operation invokes first.
///
/// Resolves the caller's identity through the auth peer, then tests it
/// against the call site's allow-list. Resolver failures propagate
/// unchanged in kind; the gate itself only ever adds `Forbidden`.
#[derive(Clone)]
pub struct Gate {
    auth: Arc<AuthClient>,
}

impl Gate {
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    /// Authorize one inbound request and return the resolved identity for
    /// business-logic scoping.
    pub async fn authorize(
        &self,
        headers: &HeaderMap,
        scope: AccessScope<'_>,
    ) -> Result<Identity, ApiError> {
        let token = bearer_token(headers).ok_or_else(|| {
            tracing::warn!("Rejecting anonymous call to a protected endpoint");
            ApiError::Forbidden(ANONYMOUS_MESSAGE.to_string())
        })?;

        let identity = self.auth.check_token(token).await?;

        match scope {
            AccessScope::Roles(allowed) => {
                // An identity without a role is un-resolved; reject before
                // any membership test.
                let role = identity.role.ok_or_else(|| {
                    tracing::warn!("Rejecting token that resolved without a role");
                    ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string())
                })?;

                if !allowed.contains(&role) {
                    let lead = identity
                        .lead_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::warn!(
                        "Lead {} with role {} denied, allowed roles {:?}",
                        lead,
                        role,
                        allowed
                    );
                    return Err(ApiError::Forbidden(format!(
                        "Lead id = {} doesn't have access to this endpoint",
                        lead
                    )));
                }
            }
            AccessScope::Microservices(allowed) => {
                let caller = identity.microservice.as_deref().ok_or_else(|| {
                    tracing::warn!("Rejecting token that resolved without an issuer");
                    ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string())
                })?;

                if !allowed.contains(&caller) {
                    tracing::warn!(
                        "Microservice {} denied, allowed issuers {:?}",
                        caller,
                        allowed
                    );
                    return Err(ApiError::Forbidden(format!(
                        "Microservice {} doesn't have access to this endpoint",
                        caller
                    )));
                }
            }
        }

        Ok(identity)
    }
}
