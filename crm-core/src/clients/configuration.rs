use crate::config::ConfigServiceSettings;
use crate::error::ApiError;
use crate::rpc::{RequestExecutor, classify};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

/// Client for the configuration peer service.
///
/// Used once at process start-up, never per-request. Authenticates with
/// the service-level credential rather than a forwarded caller token.
#[derive(Clone)]
pub struct ConfigClient {
    executor: RequestExecutor,
    settings: ConfigServiceSettings,
}

impl ConfigClient {
    pub fn new(settings: ConfigServiceSettings) -> Self {
        Self {
            executor: RequestExecutor::new(),
            settings,
        }
    }

    /// Fetch configuration values of caller-specified shape from the given
    /// path on the configuration peer.
    pub async fn fetch_configuration<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        tracing::info!("Fetching configuration from {}", path);

        let url = format!("{}{}", self.settings.url, path);
        let outcome = self
            .executor
            .get(&url, Some(self.settings.api_key.expose_secret()))
            .await?;
        let configuration: T = classify(outcome)?;

        tracing::info!("Configuration fetched from {}", path);
        Ok(configuration)
    }
}
