//! Version check against the remote version server

use anyhow::{Context as _, Result};
use reqwest::blocking::Client;
use tracing::debug;

use super::{VersionCheck, VersionStatus, parse_version_response, status_for};
use crate::config::VersionCheckConfig;
use crate::error::DispatchError;

/// Production implementation of `VersionCheck` over HTTP
#[derive(Debug, Clone)]
pub struct HttpVersionCheck {
    config: VersionCheckConfig,
}

impl HttpVersionCheck {
    /// Create a checker for the given endpoint configuration
    #[must_use]
    pub const fn new(config: VersionCheckConfig) -> Self {
        Self { config }
    }
}

impl Default for HttpVersionCheck {
    fn default() -> Self {
        Self::new(VersionCheckConfig::default())
    }
}

impl VersionCheck for HttpVersionCheck {
    fn check(&self, current: &str) -> Result<VersionStatus> {
        let url = self.config.url_for(current);
        debug!("Querying version server: {url}");

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(self.config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach version server at {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::version_check(format!(
                "version server responded with {status}"
            ))
            .into());
        }

        let body = response
            .text()
            .context("Failed to read version server response")?;
        let latest = parse_version_response(&body)?;
        Ok(status_for(current, &latest))
    }
}
