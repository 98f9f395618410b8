use axum_test::TestServer;
use hookrelay_api::{setup_routes, AppState};
use hookrelay_core::Config;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-secret-key";

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub staging_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

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
}

/// Setup a test application with an isolated staging directory
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_max_size(50 * 1024 * 1024)
}

pub fn setup_test_app_with_max_size(max_file_size_bytes: usize) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let staging_dir = temp_dir.path().join("uploads");

    let config = Config {
        server_port: 0,
        api_key: TEST_API_KEY.to_string(),
        server_url: "http://localhost:8386/api/upload".to_string(),
        watch_paths: Vec::new(),
        upload_dir: staging_dir.clone(),
        max_file_size_bytes,
        stability_threshold_ms: 1000,
        stability_poll_interval_ms: 100,
        upload_timeout_secs: 60,
    };

    let server =
        TestServer::new(setup_routes(AppState::new(config))).expect("Failed to build test server");

    TestApp {
        server,
        staging_dir,
        _temp_dir: temp_dir,
    }
}

/// Bearer header value for the shared test secret.
pub fn bearer() -> String {
    format!("Bearer {}", TEST_API_KEY)
}
