//! Shared application state

use picvault_core::Config;
use picvault_storage::Storage;
use std::sync::Arc;
use std::time::Duration;

/// State shared by all handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn Storage>,
    /// Client for upstream object fetches and URL uploads. Built once so
    /// connection pooling works across requests.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(AppState {
            config: Arc::new(config),
            storage,
            http,
        })
    }
}
