use crm_core::config::{AuthServiceSettings, ConfigServiceSettings, TransactionServiceSettings};
use serde::Deserialize;

/// Path on the configuration peer holding this service's remote settings.
pub const CRM_CONFIG_PATH: &str = "/api/configs/crm-service";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth_service: AuthServiceSettings,
    pub transaction_service: TransactionServiceSettings,
    /// Optional: when present, remote configuration is fetched at start-up
    /// and the `/api/configs/refresh` hook re-reads it on demand.
    #[serde(default)]
    pub config_service: Option<ConfigServiceSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9000
}

/// Peer addresses the configuration service may override at start-up.
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteSettings {
    #[serde(default)]
    pub auth_service_url: Option<String>,
    #[serde(default)]
    pub transaction_service_url: Option<String>,
}

impl RemoteSettings {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(url) = self.auth_service_url {
            settings.auth_service.url = url;
        }
        if let Some(url) = self.transaction_service_url {
            settings.transaction_service.url = url;
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in crm-service directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("crm-service") {
        base_path.join("config")
    } else {
        base_path.join("crm-service").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
