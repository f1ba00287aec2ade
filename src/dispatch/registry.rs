//! Subcommand registry
//!
//! Maps the closed set of command names to the handlers behind them.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use crate::config::Settings;
use crate::dispatch::handle::IndexHandle;
use crate::dispatch::quant;
use crate::error::DispatchError;
use crate::handlers::{ExternalHandler, SwimHandler};

/// Entry contract shared by every subcommand implementation
pub trait Handler {
    /// Run with the arguments following the command name and return a status code
    fn run(&mut self, args: &[String], index: &mut IndexHandle, settings: &Settings)
    -> Result<i32>;
}

/// Top-level commands understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Index,
    Quant,
    Alevin,
    Swim,
    QuantMerge,
}

impl CommandName {
    /// Every known command, in help-listing order
    pub const ALL: [Self; 5] = [
        Self::Index,
        Self::Quant,
        Self::Alevin,
        Self::Swim,
        Self::QuantMerge,
    ];

    /// Token used on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Quant => "quant",
            Self::Alevin => "alevin",
            Self::Swim => "swim",
            Self::QuantMerge => "quantmerge",
        }
    }
}

impl FromStr for CommandName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| DispatchError::unknown_command(s))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler slots held by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Index,
    QuantReads,
    QuantAlignments,
    Alevin,
    Swim,
    QuantMerge,
}

/// Command name to handler mapping
pub struct Registry {
    index: Box<dyn Handler>,
    quant_reads: Box<dyn Handler>,
    quant_alignments: Box<dyn Handler>,
    alevin: Box<dyn Handler>,
    swim: Box<dyn Handler>,
    quant_merge: Box<dyn Handler>,
}

impl Registry {
    /// Registry wired to the external handler programs, with the built-in swim
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: Box::new(ExternalHandler::locate("salmon-index").recording_index()),
            quant_reads: Box::new(ExternalHandler::locate("salmon-quant-reads")),
            quant_alignments: Box::new(ExternalHandler::locate("salmon-quant-alignment")),
            alevin: Box::new(ExternalHandler::locate("salmon-alevin")),
            swim: Box::new(SwimHandler::stdout()),
            quant_merge: Box::new(ExternalHandler::locate("salmon-quantmerge")),
        }
    }

    /// Replace the handler in one slot (builder pattern)
    #[must_use]
    pub fn with_handler(mut self, kind: HandlerKind, handler: Box<dyn Handler>) -> Self {
        *self.slot(kind) = handler;
        self
    }

    fn slot(&mut self, kind: HandlerKind) -> &mut Box<dyn Handler> {
        match kind {
            HandlerKind::Index => &mut self.index,
            HandlerKind::QuantReads => &mut self.quant_reads,
            HandlerKind::QuantAlignments => &mut self.quant_alignments,
            HandlerKind::Alevin => &mut self.alevin,
            HandlerKind::Swim => &mut self.swim,
            HandlerKind::QuantMerge => &mut self.quant_merge,
        }
    }

    /// Call the handler in `kind` and return its status unchanged
    pub fn invoke(
        &mut self,
        kind: HandlerKind,
        args: &[String],
        index: &mut IndexHandle,
        settings: &Settings,
    ) -> Result<i32> {
        debug!("Dispatching to {kind:?} with {} argument(s)", args.len());
        let status = self
            .slot(kind)
            .run(args, index, settings)
            .map_err(|err| {
                if err.is::<DispatchError>() {
                    err
                } else {
                    DispatchError::handler(format!("{kind:?} failed: {err:#}")).into()
                }
            })?;
        debug!("{kind:?} returned status {status}");
        Ok(status)
    }

    /// Route a resolved command; `quant` goes through the mode classifier
    pub fn dispatch<W: Write>(
        &mut self,
        command: CommandName,
        args: &[String],
        index: &mut IndexHandle,
        settings: &Settings,
        out: &mut W,
    ) -> Result<i32> {
        let kind = match command {
            CommandName::Quant => return quant::dispatch(self, args, index, settings, out),
            CommandName::Index => HandlerKind::Index,
            CommandName::Alevin => HandlerKind::Alevin,
            CommandName::Swim => HandlerKind::Swim,
            CommandName::QuantMerge => HandlerKind::QuantMerge,
        };
        self.invoke(kind, args, index, settings)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
