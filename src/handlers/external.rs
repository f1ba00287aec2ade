//! Handlers backed by external programs

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::config::Settings;
use crate::dispatch::{Handler, IndexHandle};
use crate::error::DispatchError;

/// Runs a separate program with the forwarded arguments
///
/// Standard streams are inherited and the program's exit status becomes the
/// handler's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalHandler {
    program: PathBuf,
    records_index: bool,
}

impl ExternalHandler {
    /// Handler running exactly `program`
    #[must_use]
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            records_index: false,
        }
    }

    /// After a successful run, record the `-i`/`--index` directory in the
    /// shared index handle (builder pattern)
    #[must_use]
    pub const fn recording_index(mut self) -> Self {
        self.records_index = true;
        self
    }

    /// Handler for `name`, preferring a program installed next to the
    /// running executable and falling back to a `PATH` lookup
    #[must_use]
    pub fn locate(name: &str) -> Self {
        let sibling = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(name)))
            .filter(|candidate| candidate.is_file());
        Self::new(sibling.unwrap_or_else(|| PathBuf::from(name)))
    }

    /// Program this handler runs
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Handler for ExternalHandler {
    fn run(&mut self, args: &[String], index: &mut IndexHandle, settings: &Settings) -> Result<i32> {
        if settings.verbose {
            info!("Running {} {}", self.program.display(), args.join(" "));
        }
        if let Some(location) = index.location() {
            debug!("Index already loaded from {}", location.display());
        }

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    DispatchError::handler_unavailable(self.program.display().to_string()).into()
                } else {
                    anyhow::Error::new(err)
                }
            })
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        let code = exit_code(status);
        debug!("{} exited with status {code}", self.program.display());

        if self.records_index && code == 0 {
            if let Some(location) = index_location(args) {
                debug!("Index available at {location}");
                index.load(location);
            }
        }
        Ok(code)
    }
}

/// Value of the last `-i`/`--index` option in `args`
fn index_location(args: &[String]) -> Option<&str> {
    let mut location = None;
    let mut words = args.iter();
    while let Some(word) = words.next() {
        if let Some(value) = word.strip_prefix("--index=") {
            location = Some(value);
        } else if word == "-i" || word == "--index" {
            location = words.next().map(String::as_str).or(location);
        }
    }
    location
}

/// Status code for a finished child; signals map to 128 + signal number
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
