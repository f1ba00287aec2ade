//! Version check collaborator
//!
//! Before a command is dispatched the running version is compared against the
//! version server. The check is advisory: failures are logged and dispatch
//! continues.

use std::cmp::Ordering;

use anyhow::Result;
use tracing::{info, warn};

use crate::error::DispatchError;

pub mod mock;
pub mod real;

pub use mock::MockVersionCheck;
pub use real::HttpVersionCheck;

/// Outcome of a version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// The running version is the latest release (or newer)
    Current,
    /// A newer release exists
    Outdated { latest: String },
}

/// Source of "latest version" information
pub trait VersionCheck {
    /// Compare `current` against the latest known release
    fn check(&self, current: &str) -> Result<VersionStatus>;
}

/// Extract the advertised version from a version server response
///
/// The body holds a line of the form `version: X.Y.Z`.
pub fn parse_version_response(body: &str) -> Result<String> {
    body.lines()
        .find_map(|line| line.trim().strip_prefix("version:"))
        .map(|version| version.trim().to_owned())
        .filter(|version| !version.is_empty())
        .ok_or_else(|| {
            DispatchError::version_check(format!("unexpected server response: {}", body.trim()))
                .into()
        })
}

/// Compare two dotted version strings component by component
///
/// Missing or non-numeric components count as zero.
#[must_use]
pub fn compare_versions(current: &str, latest: &str) -> Ordering {
    let current = version_parts(current);
    let latest = version_parts(latest);
    let len = current.len().max(latest.len());
    (0..len)
        .map(|i| {
            let a = current.get(i).copied().unwrap_or(0);
            let b = latest.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn version_parts(version: &str) -> Vec<u64> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let numeric = version.split_once('-').map_or(version, |(v, _)| v);
    numeric
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

/// Status for `current` given the advertised `latest` version
#[must_use]
pub fn status_for(current: &str, latest: &str) -> VersionStatus {
    if compare_versions(current, latest) == Ordering::Less {
        VersionStatus::Outdated {
            latest: latest.to_owned(),
        }
    } else {
        VersionStatus::Current
    }
}

/// Run the check once and log its outcome
pub fn report(checker: &dyn VersionCheck, current: &str) {
    match checker.check(current) {
        Ok(VersionStatus::Current) => {
            info!("Version Info: This is the most recent version of salmon.");
        }
        Ok(VersionStatus::Outdated { latest }) => {
            warn!(
                "Version Info: ### PLEASE UPGRADE SALMON ###\n\
                 The newest version, {latest}, is available at https://github.com/COMBINE-lab/salmon/releases\n\
                 and contains new features, improvements, and bug fixes; please upgrade at your\n\
                 earliest convenience.\n\
                 Use --no-version-check to disable this check."
            );
        }
        Err(err) => {
            warn!("Version Info Exception: {err}");
        }
    }
}
