use crm_core::clients::auth::CHECK_TOKEN_PATH;
use crm_core::config::{AuthServiceSettings, TransactionServiceSettings};
use crm_service::config::{ServerSettings, Settings};
use crm_service::startup::Application;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub auth_server: MockServer,
    pub transaction_server: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let auth_server = MockServer::start().await;
        let transaction_server = MockServer::start().await;

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port for testing
            },
            auth_service: AuthServiceSettings {
                url: auth_server.uri(),
            },
            transaction_service: TransactionServiceSettings {
                url: transaction_server.uri(),
            },
            config_service: None,
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
            auth_server,
            transaction_server,
        }
    }

    /// Stub the auth peer to resolve any token to the given identity.
    pub async fn stub_identity(&self, identity: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(CHECK_TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(identity))
            .mount(&self.auth_server)
            .await;
    }
}
