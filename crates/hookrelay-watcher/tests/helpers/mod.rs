use hookrelay_api::{setup_routes, AppState};
use hookrelay_core::Config;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// An in-process ingest server bound to an ephemeral port.
pub struct IngestServer {
    pub upload_url: String,
    pub staging_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl IngestServer {
    /// List the files currently staged, sorted by name.
    pub fn staged_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match std::fs::read_dir(&self.staging_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }

    /// Poll staging until `count` files are present or the timeout elapses.
    pub async fn wait_for_staged(&self, count: usize, timeout: Duration) -> Vec<PathBuf> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let files = self.staged_files();
            if files.len() >= count {
                return files;
            }
            if tokio::time::Instant::now() >= deadline {
                return files;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }
}

/// Start the real ingest router on 127.0.0.1:0 with an isolated staging dir.
pub async fn start_ingest_server(api_key: &str) -> IngestServer {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let staging_dir = temp_dir.path().join("uploads");

    let config = Config {
        server_port: 0,
        api_key: api_key.to_string(),
        server_url: String::new(),
        watch_paths: Vec::new(),
        upload_dir: staging_dir.clone(),
        max_file_size_bytes: 50 * 1024 * 1024,
        stability_threshold_ms: 1000,
        stability_poll_interval_ms: 100,
        upload_timeout_secs: 60,
    };

    let app = setup_routes(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    IngestServer {
        upload_url: format!("http://{}/api/upload", addr),
        staging_dir,
        _temp_dir: temp_dir,
    }
}
