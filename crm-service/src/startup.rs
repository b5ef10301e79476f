use crate::config::Settings;
use crate::handlers;
use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use crm_core::clients::{AuthClient, ConfigClient, TransactionClient};
use crm_core::gate::Gate;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state: the gate plus one client per peer service.
#[derive(Clone)]
pub struct AppState {
    pub gate: Gate,
    pub auth: Arc<AuthClient>,
    pub transactions: Arc<TransactionClient>,
    pub configs: Option<Arc<ConfigClient>>,
}

/// Health check endpoint for Docker/K8s liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "crm-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/accounts/balance", get(handlers::accounts::balance))
        .route(
            "/api/accounts/:account_id/transactions",
            get(handlers::accounts::transactions),
        )
        .route(
            "/api/transactions/deposit",
            post(handlers::transactions::deposit),
        )
        .route(
            "/api/transactions/withdraw",
            post(handlers::transactions::withdraw),
        )
        .route(
            "/api/transactions/transfer",
            post(handlers::transactions::transfer),
        )
        .route("/api/configs/refresh", post(handlers::configs::refresh))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration. Binding port 0
    /// picks a free port, which `port()` reports back for tests.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let auth = Arc::new(AuthClient::new(settings.auth_service.clone()));
        let transactions = Arc::new(TransactionClient::new(settings.transaction_service.clone()));
        let configs = settings
            .config_service
            .clone()
            .map(|config_settings| Arc::new(ConfigClient::new(config_settings)));

        let state = AppState {
            gate: Gate::new(auth.clone()),
            auth,
            transactions,
            configs,
        };
        let router = build_router(state);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Starting crm-service on port {}", self.port);
        axum::serve(self.listener, self.router).await
    }
}
