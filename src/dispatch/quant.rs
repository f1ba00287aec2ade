//! `salmon quant` mode classification
//!
//! `quant` fronts two backends: read-based quantification and
//! alignment-based quantification. The backend is picked from the arguments
//! alone, using prefix matches on a handful of flags.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::VERSION;
use crate::cli::help::dual_mode_banner;
use crate::config::Settings;
use crate::dispatch::handle::IndexHandle;
use crate::dispatch::registry::{HandlerKind, Registry};

/// A flag recognised by its leading characters
///
/// An argument matches when it starts with the first `len` bytes of
/// `token`, so `-abc` matches `-a` and `--eqclassesXYZ` matches
/// `--eqclasses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFlag {
    token: &'static str,
    len: usize,
}

impl PrefixFlag {
    /// Flag matched on its full length
    #[must_use]
    pub const fn new(token: &'static str) -> Self {
        Self {
            token,
            len: token.len(),
        }
    }

    /// Whether `arg` starts with this flag's prefix
    #[must_use]
    pub fn matches(&self, arg: &str) -> bool {
        self.token
            .as_bytes()
            .get(..self.len)
            .is_some_and(|prefix| arg.as_bytes().starts_with(prefix))
    }
}

pub const HELP_ALIGNMENT: PrefixFlag = PrefixFlag::new("--help-alignment");
pub const HELP_READS: PrefixFlag = PrefixFlag::new("--help-reads");
pub const HELP: PrefixFlag = PrefixFlag::new("--help");
pub const SHORT_HELP: PrefixFlag = PrefixFlag::new("-h");

/// Flags that select alignment-based quantification
pub const ALIGNMENT_FLAGS: [PrefixFlag; 4] = [
    PrefixFlag::new("-a"),
    PrefixFlag::new("-e"),
    PrefixFlag::new("--alignments"),
    PrefixFlag::new("--eqclasses"),
];

/// What `quant` should do with a given argument slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantMode {
    /// Print the dual-mode banner
    Banner,
    /// Ask the alignment-based backend for its help
    AlignmentHelp,
    /// Ask the read-based backend for its help
    ReadsHelp,
    /// Quantify from alignments or equivalence classes
    Alignment,
    /// Quantify from raw reads
    Reads,
}

/// Classify the arguments that follow `quant`
///
/// Only the first argument is inspected for help requests. Mode selection
/// scans every argument and stops at the first alignment flag; conflicting
/// flags are not reported.
#[must_use]
pub fn classify(args: &[String]) -> QuantMode {
    let Some(first) = args.first() else {
        return QuantMode::Banner;
    };

    if HELP_ALIGNMENT.matches(first) {
        return QuantMode::AlignmentHelp;
    }
    if HELP_READS.matches(first) {
        return QuantMode::ReadsHelp;
    }
    if HELP.matches(first) || SHORT_HELP.matches(first) {
        return QuantMode::Banner;
    }

    let alignment_flag = args
        .iter()
        .find(|arg| ALIGNMENT_FLAGS.iter().any(|flag| flag.matches(arg)));

    match alignment_flag {
        Some(arg) => {
            debug!("Alignment-based mode selected by '{arg}'");
            QuantMode::Alignment
        }
        None => QuantMode::Reads,
    }
}

/// Synthetic argument slice used to request a backend's own help
#[must_use]
pub fn help_args(program: &str) -> Vec<String> {
    vec![program.to_owned(), "--help".to_owned()]
}

/// Classify `args` and forward to the matching quantification handler
pub fn dispatch<W: Write>(
    registry: &mut Registry,
    args: &[String],
    index: &mut IndexHandle,
    settings: &Settings,
    out: &mut W,
) -> Result<i32> {
    match classify(args) {
        QuantMode::Banner => {
            out.write_all(dual_mode_banner(VERSION).as_bytes())?;
            Ok(0)
        }
        QuantMode::AlignmentHelp => registry.invoke(
            HandlerKind::QuantAlignments,
            &help_args(&settings.program),
            index,
            settings,
        ),
        QuantMode::ReadsHelp => registry.invoke(
            HandlerKind::QuantReads,
            &help_args(&settings.program),
            index,
            settings,
        ),
        QuantMode::Alignment => {
            registry.invoke(HandlerKind::QuantAlignments, args, index, settings)
        }
        QuantMode::Reads => registry.invoke(HandlerKind::QuantReads, args, index, settings),
    }
}
