//! The `swim` easter egg

use std::io::{self, Stdout, Write};

use anyhow::Result;

use crate::cli::help::SWIM_BANNER;
use crate::config::Settings;
use crate::dispatch::{Handler, IndexHandle};

/// Prints the salmon banner and ignores its arguments
#[derive(Debug)]
pub struct SwimHandler<W = Stdout> {
    out: W,
}

impl SwimHandler {
    /// Handler writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SwimHandler<W> {
    /// Handler writing to `out`
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Handler for SwimHandler<W> {
    fn run(
        &mut self,
        _args: &[String],
        _index: &mut IndexHandle,
        _settings: &Settings,
    ) -> Result<i32> {
        self.out.write_all(SWIM_BANNER.as_bytes())?;
        self.out.flush()?;
        Ok(0)
    }
}
