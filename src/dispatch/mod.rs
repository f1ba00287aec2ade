//! Invocation dispatch
//!
//! Resolves the top-level argument vector into help output or a call into one
//! of the registered subcommand handlers.

pub mod handle;
pub mod quant;
pub mod registry;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::VERSION;
use crate::cli::help::{CITATION, top_level_help, version_line};
use crate::cli::{Request, parse_request};
use crate::config::Settings;
use crate::version::{self, VersionCheck};

pub use handle::IndexHandle;
pub use quant::{PrefixFlag, QuantMode};
pub use registry::{CommandName, Handler, HandlerKind, Registry};

/// Top-level entry point for one invocation
pub struct Dispatcher {
    registry: Registry,
    version_check: Box<dyn VersionCheck>,
    verbose: bool,
}

impl Dispatcher {
    /// Create a dispatcher over `registry` using `version_check` before commands
    #[must_use]
    pub fn new(registry: Registry, version_check: Box<dyn VersionCheck>) -> Self {
        Self {
            registry,
            version_check,
            verbose: false,
        }
    }

    /// Set the verbosity handed to handlers (builder pattern)
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Handle `argv` (program name first) and return the process status
    ///
    /// Help, version and citation text go to `out`. Handler statuses are
    /// returned unchanged.
    pub fn run<W: Write>(&mut self, argv: &[String], out: &mut W) -> Result<i32> {
        let program = argv
            .first()
            .cloned()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

        let request = match parse_request(argv) {
            Ok(request) => request,
            Err(err) => {
                debug!("Unrecognised invocation: {err}");
                out.write_all(top_level_help(VERSION).as_bytes())?;
                return Ok(1);
            }
        };

        match request {
            Request::Help => {
                out.write_all(top_level_help(VERSION).as_bytes())?;
                Ok(0)
            }
            Request::Version => {
                out.write_all(version_line(VERSION).as_bytes())?;
                Ok(0)
            }
            Request::Cite => {
                out.write_all(CITATION.as_bytes())?;
                Ok(0)
            }
            Request::Command {
                name,
                args,
                check_version,
            } => {
                let command = match name.parse::<CommandName>() {
                    Ok(command) => command,
                    Err(err) => {
                        debug!("{err}");
                        out.write_all(top_level_help(VERSION).as_bytes())?;
                        return Ok(err.exit_code());
                    }
                };

                let settings = Settings::new(program)
                    .with_verbose(self.verbose)
                    .with_version_check(check_version);

                if settings.check_version {
                    version::report(self.version_check.as_ref(), VERSION);
                }

                let mut index = IndexHandle::new();
                let status =
                    self.registry
                        .dispatch(command, &args, &mut index, &settings, out)?;
                out.flush()?;
                Ok(status)
            }
        }
    }
}
