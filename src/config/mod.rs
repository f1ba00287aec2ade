//! Runtime configuration module
//!
//! Holds the settings threaded from the entry point into subcommand handlers

use std::time::Duration;

/// Default endpoint queried by the version check
pub const DEFAULT_VERSION_INFO_URL: &str = "https://combine-lab.github.io/salmon/version_info";

/// Settings for one invocation, passed to every handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program name as it appeared in the argument vector
    pub program: String,

    /// Emit diagnostic output
    pub verbose: bool,

    /// Query the version server before dispatching a command
    pub check_version: bool,
}

impl Settings {
    /// Create settings for the given program name with defaults
    #[must_use]
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            verbose: false,
            check_version: true,
        }
    }

    /// Set verbosity (builder pattern)
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable the version check (builder pattern)
    #[must_use]
    pub const fn with_version_check(mut self, check_version: bool) -> Self {
        self.check_version = check_version;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Where and how long to wait for version information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheckConfig {
    /// Base URL; the current version is appended as the last path segment
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,
}

impl VersionCheckConfig {
    /// URL queried for the given version
    #[must_use]
    pub fn url_for(&self, version: &str) -> String {
        format!("{}/{version}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for VersionCheckConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VERSION_INFO_URL.to_owned(),
            timeout: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_builder() {
        let settings = Settings::new("salmon")
            .with_verbose(true)
            .with_version_check(false);
        assert_eq!(settings.program, "salmon");
        assert!(settings.verbose);
        assert!(!settings.check_version);
    }

    #[test]
    fn version_url_ignores_trailing_slash() {
        let config = VersionCheckConfig {
            base_url: "http://localhost/version_info/".to_owned(),
            ..VersionCheckConfig::default()
        };
        assert_eq!(config.url_for("1.10.3"), "http://localhost/version_info/1.10.3");
    }
}
