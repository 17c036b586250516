//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable host configuration and one pooled HTTP client used
//! for every upstream call.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, HostConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream client.
    ///
    /// Redirects are not followed: the backend's `Location` is relayed to the
    /// browser as-is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClientBuild` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: HostConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
