use secrecy::Secret;
use serde::Deserialize;

/// Where the auth peer lives.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthServiceSettings {
    pub url: String,
}

/// Where the transaction store peer lives.
#[derive(Debug, Deserialize, Clone)]
pub struct TransactionServiceSettings {
    pub url: String,
}

/// Where the configuration peer lives, plus the service-level credential
/// used to fetch remote configuration at start-up.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigServiceSettings {
    pub url: String,
    pub api_key: Secret<String>,
}
