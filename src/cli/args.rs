use clap::{Parser, Subcommand};

/// Top-level arguments for salmon
///
/// Only the global flags are interpreted here. The command name and
/// everything after it are captured verbatim for the subcommand handlers.
#[derive(Parser, Debug, Clone)]
#[command(name = "salmon")]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
#[command(args_override_self = true)]
pub struct GlobalArgs {
    /// Print the top-level help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print the version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print citation information
    #[arg(short = 'c', long = "cite")]
    pub cite: bool,

    /// Skip the remote version check
    #[arg(long = "no-version-check")]
    pub no_version_check: bool,

    /// Command name followed by its arguments
    #[command(subcommand)]
    pub command: Option<CommandLine>,
}

/// Raw command line following the global flags
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// What the top-level invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Help,
    Version,
    Cite,
    Command {
        name: String,
        args: Vec<String>,
        check_version: bool,
    },
}

impl GlobalArgs {
    /// Resolve the parsed flags into a single request
    ///
    /// Help wins over version, version over citation, and any of them over a
    /// command.
    #[must_use]
    pub fn into_request(self) -> Request {
        if let Some(request) = flag_request(self.help, self.version, self.cite) {
            return request;
        }

        let Some(CommandLine::External(mut words)) = self.command else {
            return Request::Help;
        };
        if words.is_empty() {
            return Request::Help;
        }
        let name = words.remove(0);
        Request::Command {
            name,
            args: words,
            check_version: !self.no_version_check,
        }
    }
}

/// Request selected by the global help, version and citation flags
fn flag_request(help: bool, version: bool, cite: bool) -> Option<Request> {
    if help {
        Some(Request::Help)
    } else if version {
        Some(Request::Version)
    } else if cite {
        Some(Request::Cite)
    } else {
        None
    }
}

/// Resolve the run of global flags at the start of `argv`, ignoring whatever
/// follows it
fn leading_flag_request<T: AsRef<str>>(argv: &[T]) -> Option<Request> {
    let (mut help, mut version, mut cite) = (false, false, false);
    for arg in argv.iter().skip(1).map(AsRef::<str>::as_ref) {
        match arg {
            "-h" | "--help" => help = true,
            "-v" | "--version" => version = true,
            "-c" | "--cite" => cite = true,
            "--no-version-check" => {}
            _ => break,
        }
    }
    flag_request(help, version, cite)
}

/// Parse a full argument vector (program name first)
///
/// Leading help, version or citation flags win even when clap rejects the
/// tokens that follow them.
pub fn parse_request<T: AsRef<str>>(argv: &[T]) -> Result<Request, clap::Error> {
    GlobalArgs::try_parse_from(argv.iter().map(AsRef::<str>::as_ref))
        .map(GlobalArgs::into_request)
        .or_else(|err| leading_flag_request(argv).ok_or(err))
}
