use crate::error::ApiError;
use crate::rpc::{MICROSERVICE_HEADER, MICROSERVICE_NAME};
use http::StatusCode;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

/// The uninterpreted result of exactly one network round trip.
///
/// Non-2xx statuses and absent bodies are data here, not errors; the
/// classifier decides what they mean.
#[derive(Debug, Clone)]
pub struct RawOutcome {
    pub status: StatusCode,
    pub body: Option<String>,
}

impl RawOutcome {
    /// The upstream message, verbatim. Empty when the peer sent no body.
    pub fn message(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Performs outbound calls to peer services.
///
/// One network round trip per call, no interpretation, no retries. Every
/// request carries the microservice tag header. Only transport-level
/// failures (the request never produced a status code) are errors at this
/// layer.
#[derive(Clone, Default)]
pub struct RequestExecutor {
    client: Client,
}

impl RequestExecutor {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Send a GET request, optionally with a bearer token.
    pub async fn get(&self, url: &str, bearer: Option<&str>) -> Result<RawOutcome, ApiError> {
        let request = self.client.get(url);
        self.dispatch(request, url, bearer).await
    }

    /// Send a POST request with a JSON body, optionally with a bearer token.
    pub async fn post<B>(
        &self,
        url: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<RawOutcome, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.client.post(url).json(body);
        self.dispatch(request, url, bearer).await
    }

    async fn dispatch(
        &self,
        request: RequestBuilder,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<RawOutcome, ApiError> {
        let mut request = request.header(MICROSERVICE_HEADER, MICROSERVICE_NAME);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url, e);
            if e.is_timeout() {
                ApiError::RequestTimeout(e.to_string())
            } else if e.is_connect() {
                ApiError::ServiceUnavailable(e.to_string())
            } else {
                ApiError::InternalError(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            ApiError::InternalError(e.to_string())
        })?;

        Ok(RawOutcome {
            status,
            body: (!text.is_empty()).then_some(text),
        })
    }
}
