//! Mock version check for testing

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use super::{VersionCheck, VersionStatus};

/// In-memory implementation of `VersionCheck`
///
/// Returns a fixed answer (or failure) and records the versions it was asked
/// about. Clones share the call log.
#[derive(Debug, Clone)]
pub struct MockVersionCheck {
    answer: Option<VersionStatus>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MockVersionCheck {
    /// A checker reporting the running version as current
    #[must_use]
    pub fn current() -> Self {
        Self::answering(Some(VersionStatus::Current))
    }

    /// A checker reporting a newer release
    #[must_use]
    pub fn outdated(latest: &str) -> Self {
        Self::answering(Some(VersionStatus::Outdated {
            latest: latest.to_owned(),
        }))
    }

    /// A checker whose every call fails
    #[must_use]
    pub fn failing() -> Self {
        Self::answering(None)
    }

    fn answering(answer: Option<VersionStatus>) -> Self {
        Self {
            answer,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Versions passed to `check`, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VersionCheck for MockVersionCheck {
    fn check(&self, current: &str) -> Result<VersionStatus> {
        self.calls.borrow_mut().push(current.to_owned());
        self.answer
            .clone()
            .ok_or_else(|| anyhow!("version server unreachable"))
    }
}
