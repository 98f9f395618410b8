use std::sync::Arc;
use std::time::Duration;

use hookrelay_api_client::ApiClient;
use hookrelay_core::Config;
use hookrelay_watcher::{forwarder, observer, stabilizer, telemetry, EVENT_CHANNEL_CAPACITY};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    if config.has_placeholder_api_key() {
        tracing::warn!("API_KEY is the shipped placeholder; override it in production");
    }

    let client = Arc::new(ApiClient::new(
        config.server_url.clone(),
        config.api_key.clone(),
        config.upload_timeout_secs,
    )?);

    // Observer -> stabilizer -> forwarder, decoupled by channels so network
    // I/O never blocks event detection.
    let (raw_tx, raw_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let observer = observer::start(&config.watch_paths, raw_tx)?;

    tokio::spawn(stabilizer::run(
        raw_rx,
        event_tx,
        Duration::from_millis(config.stability_threshold_ms),
        Duration::from_millis(config.stability_poll_interval_ms.max(1)),
    ));
    tokio::spawn(forwarder::run(event_rx, client));

    tracing::info!(server_url = %config.server_url, "Watching for changes");
    for path in &observer.watched {
        tracing::info!(path = %path.display(), "Watching directory");
    }

    tokio::signal::ctrl_c().await?;

    tracing::info!("Stopping watcher");
    drop(observer);

    Ok(())
}
