//! # salmon
//!
//! Command-line front-end for the salmon transcript quantification tools.
//! Each command is served by its own handler:
//!
//! - `index`: build a salmon index
//! - `quant`: quantify a sample, from raw reads or from alignments
//! - `alevin`: single-cell analysis
//! - `quantmerge`: merge several quantifications into one file
//!
//! ## Usage
//!
//! ```sh
//! salmon quant -i transcripts_index -l A -1 reads_1.fq -2 reads_2.fq -o quant
//! salmon quant -t transcripts.fa -l A -a aligned.bam -o quant
//! ```
//!
//! Set `RUST_LOG=debug` to trace dispatch decisions.

use salmon::error::DispatchError;
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let verbose = LevelFilter::current() >= LevelFilter::DEBUG;

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match salmon::run(&argv, verbose) {
        Ok(status) => std::process::exit(status),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(
                err.downcast_ref::<DispatchError>()
                    .map_or(1, DispatchError::exit_code),
            );
        }
    }
}
