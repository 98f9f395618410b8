use hookrelay_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    hookrelay_api::telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    if config.has_placeholder_api_key() {
        tracing::warn!("API_KEY is the shipped placeholder; override it in production");
    }

    let state = hookrelay_api::AppState::new(config.clone());
    let router = hookrelay_api::setup_routes(state);

    // Start the server
    hookrelay_api::server::start_server(&config, router).await?;

    Ok(())
}
