//! HTTP client for the hookrelay ingest server.
//!
//! Provides a minimal client with bearer auth and a single domain method:
//! streaming a local file plus its event metadata to the upload endpoint.
//! The watcher uses this client directly.

use anyhow::{Context, Result};
use hookrelay_core::constants::{FIELD_EVENT_TYPE, FIELD_FILE, FIELD_FILE_PATH, HOOK_HEADER};
use hookrelay_core::{UploadResponse, WatchEventKind};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio_util::io::ReaderStream;

/// HTTP client for the ingest server with bearer auth.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    upload_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(upload_url: String, api_key: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upload_url,
            api_key,
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Forward one file to the ingest server.
    ///
    /// The file is opened at send-time and streamed; nothing is buffered
    /// ahead of the request. There is no client-side size cap and no retry —
    /// the caller decides what to do with a failure.
    pub async fn upload_file(
        &self,
        path: &Path,
        event_type: WatchEventKind,
    ) -> Result<UploadResponse> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        let part = reqwest::multipart::Part::stream(reqwest::Body::wrap_stream(
            ReaderStream::new(file),
        ))
        .file_name(file_name);

        let form = reqwest::multipart::Form::new()
            .part(FIELD_FILE, part)
            .text(FIELD_EVENT_TYPE, event_type.as_str())
            .text(FIELD_FILE_PATH, path.display().to_string());

        let response = self
            .client
            .post(&self.upload_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header(HOOK_HEADER, "true")
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Upload failed with status {}: {}",
                status,
                error_text
            ));
        }

        let body: UploadResponse = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_upload_url() {
        let client =
            ApiClient::new("http://localhost:8386/api/upload".to_string(), "k".to_string(), 60)
                .expect("client");
        assert_eq!(client.upload_url(), "http://localhost:8386/api/upload");
    }
}
