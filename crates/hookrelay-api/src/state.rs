//! Shared application state

use crate::storage::StagingStore;
use hookrelay_core::Config;

/// State shared by every request handler. Requests are otherwise independent;
/// the only shared resource is the staging directory.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub staging: StagingStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let staging = StagingStore::new(config.upload_dir.clone());
        Self { config, staging }
    }
}
