use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Closed taxonomy for everything that can go wrong between this service
/// and its peers, plus the ambient failures of the hosting surface.
///
/// Peer-call outcomes map onto these kinds in
/// [`crate::rpc::classifier::classify`]; the `IntoResponse` impl below is
/// the single boundary translator from kind to HTTP status. "Not found"
/// and "forbidden" are siblings here, not parent/child.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Peer answered 408: it gave up on its own upstream work in time.
    #[error("Request timeout: {0}")]
    RequestTimeout(String),

    /// Peer reachable but refusing work, or unreachable at connect time.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Peer rejected our request shape. An integration fault on our side
    /// of the wire, not a caller input fault.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Peer returned no usable body.
    #[error("Empty payload: {0}")]
    EmptyPayload(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// The outbound HTTP status for this kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::RequestTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::EmptyPayload(_) => StatusCode::BAD_GATEWAY,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message carried to the caller. Upstream messages pass through
    /// verbatim; masking of sensitive fields happens only in log lines.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::RequestTimeout(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::BadGateway(msg)
            | ApiError::EmptyPayload(msg)
            | ApiError::InternalError(msg) => msg.clone(),
            ApiError::ValidationError(err) => err.to_string(),
            ApiError::ConfigError(err) => err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_every_kind() {
        let cases = [
            (ApiError::BadRequest("m".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("m".into()), StatusCode::NOT_FOUND),
            (ApiError::Forbidden("m".into()), StatusCode::FORBIDDEN),
            (
                ApiError::RequestTimeout("m".into()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ApiError::ServiceUnavailable("m".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ApiError::BadGateway("m".into()), StatusCode::BAD_GATEWAY),
            (ApiError::EmptyPayload("m".into()), StatusCode::BAD_GATEWAY),
            (
                ApiError::InternalError("m".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "wrong status for {:?}", error);
        }
    }

    #[test]
    fn message_passes_upstream_text_verbatim() {
        let error = ApiError::RequestTimeout("Exceptions test".into());
        assert_eq!(error.message(), "Exceptions test");
    }
}
