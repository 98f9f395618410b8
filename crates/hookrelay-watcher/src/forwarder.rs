//! Event forwarding
//!
//! Consumes stabilized events and submits each one to the ingest server.
//! Forwards run concurrently with no ordering guarantee between files. The
//! upload call returns a `Result`; the policy applied here is log-and-drop —
//! no retry, no backoff, no dead-letter store.

use hookrelay_api_client::ApiClient;
use hookrelay_core::WatchEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Consume events until the channel closes.
pub async fn run(mut events: mpsc::Receiver<WatchEvent>, client: Arc<ApiClient>) {
    while let Some(event) = events.recv().await {
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            let basename = event
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string();

            tracing::info!(
                event_type = %event.kind,
                path = %event.path.display(),
                "Detected change"
            );

            match client.upload_file(&event.path, event.kind).await {
                Ok(response) => {
                    tracing::info!(
                        file = %basename,
                        size = response.data.size,
                        "Upload succeeded"
                    );
                }
                Err(error) => {
                    tracing::error!(
                        file = %basename,
                        error = %error,
                        "Upload failed"
                    );
                }
            }
        });
    }
}
