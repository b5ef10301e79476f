use crm_core::clients::ConfigClient;
use crm_core::observability::init_tracing;
use crm_service::config::{CRM_CONFIG_PATH, RemoteSettings, get_configuration};
use crm_service::startup::Application;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let mut configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info");

    // Remote configuration is fetched once at start-up, never per-request.
    if let Some(config_settings) = configuration.config_service.clone() {
        let configs = ConfigClient::new(config_settings);
        let remote: RemoteSettings = configs
            .fetch_configuration(CRM_CONFIG_PATH)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch remote configuration: {}", e))?;
        remote.apply(&mut configuration);
        info!("Remote configuration applied");
    }

    let app = Application::build(configuration).await?;
    app.run_until_stopped().await?;

    Ok(())
}
