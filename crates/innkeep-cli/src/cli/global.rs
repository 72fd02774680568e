//! Global arguments that apply to every subcommand.
//!
//! Flattened into [`super::Cli`]; each flag is also accepted after the
//! subcommand.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted by every `innkeep` command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what innkeep does and print error details.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log API calls (-v), workflow stages (-vv), traces (-vvv)",
        long_help = "Log more of what innkeep does on stderr:
    (none)  - Rejected drafts and failed checks
    -v      - API requests and their results; errors show their cause
    -vv     - Room workflow stages (validate, uniqueness, capacity, write)
    -vvv    - Trace events
RUST_LOG, when set, replaces these levels."
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; JSON output is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and JSON only"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>) and `output.no_color`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Replaces the platform config location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format`, then to the terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,

    /// Base URL of the hotel API, overriding config and environment.
    #[arg(
        long = "api-url",
        global = true,
        value_name = "URL",
        help = "Hotel API base URL (overrides api.base_url)"
    )]
    pub api_url: Option<String>,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Configured format, else human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Colored tables and notices.
    Human,
    /// Tables and notices without color.
    Plain,
    /// Pretty JSON of the returned records.
    Json,
}
