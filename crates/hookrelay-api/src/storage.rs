//! Staging storage
//!
//! Accepted uploads are written under the staging directory as
//! `{unixMillis}-{originalBasename}`. The directory is created on demand;
//! files are never deleted here. Two uploads sharing a basename within the
//! same millisecond collide and the later write wins.

use chrono::Utc;
use hookrelay_core::AppError;
use std::path::{Path, PathBuf};

/// Writes accepted uploads into the staging directory.
#[derive(Clone, Debug)]
pub struct StagingStore {
    dir: PathBuf,
}

/// A persisted upload: where it landed and how many bytes were written.
#[derive(Debug)]
pub struct StoredFile {
    pub path: PathBuf,
    pub size: u64,
}

impl StagingStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one upload. The stored name keeps only the basename of the
    /// client-supplied filename, so path components cannot escape staging.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let basename = sanitize_basename(original_name);
        let millis = Utc::now().timestamp_millis();
        let path = self.dir.join(format!("{}-{}", millis, basename));

        tokio::fs::write(&path, bytes).await?;

        Ok(StoredFile {
            path,
            size: bytes.len() as u64,
        })
    }
}

/// Reduce a client-supplied filename to its final path component.
fn sanitize_basename(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .unwrap_or("upload.bin")
        .to_string()
}
