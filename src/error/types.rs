//! Dispatcher error types with exit codes

use thiserror::Error;

/// Main error type for the salmon dispatcher
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DispatchError {
    /// The top-level command is not one of the known subcommands
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A subcommand handler failed without producing a status code
    #[error("Handler error: {message}")]
    Handler { message: String },

    /// The program backing a subcommand could not be started
    #[error("Handler unavailable: could not start '{program}'")]
    HandlerUnavailable { program: String },

    /// The remote version check failed
    #[error("Version check error: {message}")]
    VersionCheck { message: String },
}

impl DispatchError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::UnknownCommand { .. } | Self::Handler { .. } | Self::VersionCheck { .. } => 1,
            Self::HandlerUnavailable { .. } => 127,
        }
    }

    /// Create an unknown command error
    #[inline]
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a handler error
    #[inline]
    pub fn handler<S: Into<String>>(message: S) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Create a handler unavailable error
    #[inline]
    pub fn handler_unavailable<S: Into<String>>(program: S) -> Self {
        Self::HandlerUnavailable {
            program: program.into(),
        }
    }

    /// Create a version check error
    #[inline]
    pub fn version_check<S: Into<String>>(message: S) -> Self {
        Self::VersionCheck {
            message: message.into(),
        }
    }
}
