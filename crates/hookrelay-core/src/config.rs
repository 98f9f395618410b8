//! Configuration module
//!
//! Environment-driven configuration for the watcher and the ingest server.
//! Everything is read once at process start into an immutable [`Config`] that
//! is passed explicitly to each component.

use std::env;
use std::path::PathBuf;

/// Placeholder secret shipped as a default. Deployments must override it.
pub const PLACEHOLDER_API_KEY: &str = "your-secret-api-key";

// Defaults
const DEFAULT_PORT: u16 = 8386;
const DEFAULT_SERVER_URL: &str = "http://localhost:8386/api/upload";
const DEFAULT_WATCH_PATHS: &str = "~/.claude/teams,~/.claude/tasks";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const MAX_FILE_SIZE_MB: usize = 50;
const STABILITY_THRESHOLD_MS: u64 = 1000;
const STABILITY_POLL_INTERVAL_MS: u64 = 100;
const UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Application configuration, shared by both binaries.
#[derive(Clone, Debug)]
pub struct Config {
    /// Ingest server listen port.
    pub server_port: u16,
    /// Shared secret both processes must agree on (bearer token).
    pub api_key: String,
    /// Upload endpoint the watcher posts to.
    pub server_url: String,
    /// Root directories the watcher observes recursively.
    pub watch_paths: Vec<PathBuf>,
    /// Staging directory for accepted uploads, relative to the working directory.
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_file_size_bytes: usize,
    /// Quiet period after the last observed write before a file is forwarded.
    pub stability_threshold_ms: u64,
    /// Polling cadence while waiting for a file to stabilize.
    pub stability_poll_interval_ms: u64,
    /// Timeout on the outbound upload request.
    pub upload_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let api_key = env::var("API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string());

        let server_url =
            env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let watch_paths = parse_watch_paths(
            &env::var("WATCH_PATHS").unwrap_or_else(|_| DEFAULT_WATCH_PATHS.to_string()),
        );

        let upload_dir = PathBuf::from(
            env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
        );

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let stability_threshold_ms = env::var("STABILITY_THRESHOLD_MS")
            .unwrap_or_else(|_| STABILITY_THRESHOLD_MS.to_string())
            .parse()
            .unwrap_or(STABILITY_THRESHOLD_MS);

        let stability_poll_interval_ms = env::var("STABILITY_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| STABILITY_POLL_INTERVAL_MS.to_string())
            .parse()
            .unwrap_or(STABILITY_POLL_INTERVAL_MS);

        let upload_timeout_secs = env::var("UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| UPLOAD_TIMEOUT_SECS.to_string())
            .parse()
            .unwrap_or(UPLOAD_TIMEOUT_SECS);

        Ok(Config {
            server_port,
            api_key,
            server_url,
            watch_paths,
            upload_dir,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            stability_threshold_ms,
            stability_poll_interval_ms,
            upload_timeout_secs,
        })
    }

    /// True while the deployment is still running on the shipped default secret.
    pub fn has_placeholder_api_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

/// Split a comma-separated path list, expanding a leading `~` to the home
/// directory. Empty entries are skipped.
pub fn parse_watch_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(expand_home)
        .collect()
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
