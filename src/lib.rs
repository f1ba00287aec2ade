//! `salmon` - front-end dispatcher for the salmon quantification tools
//!
//! This library resolves a `salmon` command line into help output or a call
//! into one of the subcommand handlers (`index`, `quant`, `alevin`, `swim`,
//! `quantmerge`). `quant` is further split between read-based and
//! alignment-based quantification from its arguments.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod version;

use std::io::{self, Write as _};

use anyhow::Result;
use dispatch::{Dispatcher, Registry};
use version::HttpVersionCheck;

/// Version reported by `--version` and compared by the version check
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main entry point for the salmon library
///
/// Dispatches `argv` (program name first) with the default handler wiring,
/// writing help text to standard output.
pub fn run(argv: &[String], verbose: bool) -> Result<i32> {
    let mut dispatcher = Dispatcher::new(Registry::new(), Box::new(HttpVersionCheck::default()))
        .with_verbose(verbose);
    let mut stdout = io::stdout().lock();
    let status = dispatcher.run(argv, &mut stdout)?;
    stdout.flush()?;
    Ok(status)
}
