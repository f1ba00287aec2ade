//! Shared index handle lent to subcommand handlers

use std::path::{Path, PathBuf};

/// Index resource shared by the handlers of a single invocation
///
/// Starts empty. Only handlers that build or load an index populate it, so
/// every other handler must treat it as possibly empty.
#[derive(Debug, Default)]
pub struct IndexHandle {
    location: Option<PathBuf>,
}

impl IndexHandle {
    /// Create an empty handle
    #[must_use]
    pub const fn new() -> Self {
        Self { location: None }
    }

    /// Whether an index has been built or loaded into this handle
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.location.is_some()
    }

    /// Directory of the loaded index, if any
    #[must_use]
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Record a loaded index, returning the one it replaces
    pub fn load<P: Into<PathBuf>>(&mut self, location: P) -> Option<PathBuf> {
        self.location.replace(location.into())
    }
}
