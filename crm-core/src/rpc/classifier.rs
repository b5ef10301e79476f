use crate::error::ApiError;
use crate::rpc::executor::RawOutcome;
use http::StatusCode;
use serde::de::DeserializeOwned;

/// Turn one raw outcome into a typed payload or one member of the error
/// taxonomy.
///
/// The branches form an ordered decision table; later checks are
/// unreachable once an earlier one matches. In particular, body absence is
/// checked before the 403 arm, so a Forbidden response with an empty body
/// classifies as `EmptyPayload`. That ordering is observable, tested
/// behavior and must not be reordered.
///
/// Exactly one Error-level log line per failure, fixed templates, upstream
/// message verbatim. No business validation beyond "payload decodes".
pub fn classify<T: DeserializeOwned>(outcome: RawOutcome) -> Result<T, ApiError> {
    let message = outcome.message().to_string();

    if outcome.status == StatusCode::OK {
        // Absence of a decodable body is itself a classified outcome.
        match outcome.body.as_deref() {
            Some(body) => serde_json::from_str(body).map_err(|_| {
                tracing::error!("Content equal's null {}", message);
                ApiError::EmptyPayload(message)
            }),
            None => {
                tracing::error!("Content equal's null {}", message);
                Err(ApiError::EmptyPayload(message))
            }
        }
    } else if outcome.status == StatusCode::REQUEST_TIMEOUT {
        tracing::error!("Request Timeout {}", message);
        Err(ApiError::RequestTimeout(message))
    } else if outcome.status == StatusCode::SERVICE_UNAVAILABLE {
        tracing::error!("Service Unavailable {}", message);
        Err(ApiError::ServiceUnavailable(message))
    } else if outcome.status == StatusCode::BAD_REQUEST {
        tracing::error!("Bad Gateway {}", message);
        Err(ApiError::BadGateway(message))
    } else if outcome.body.is_none() {
        tracing::error!("Content equal's null {}", message);
        Err(ApiError::EmptyPayload(message))
    } else if outcome.status == StatusCode::FORBIDDEN {
        tracing::error!("Forbidden {}", message);
        Err(ApiError::Forbidden(message))
    } else {
        tracing::error!("Error Other Service {}", message);
        Err(ApiError::InternalError(message))
    }
}
