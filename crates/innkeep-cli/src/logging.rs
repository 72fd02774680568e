//! Tracing subscriber setup for the `innkeep` binary.
//!
//! The core and adapter crates only emit events. Their level follows the
//! `-v`/`-q` flags below unless `RUST_LOG` is set, in which case `RUST_LOG`
//! is used as given. Dependencies stay silent.
//!
//! | Flag(s)   | Shows                                |
//! |-----------|--------------------------------------|
//! | `--quiet` | errors                               |
//! | (none)    | rejected drafts and failed checks    |
//! | `-v`      | API requests and their results       |
//! | `-vv`     | room workflow stages, with targets   |
//! | `-vvv`    | trace events                         |

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["innkeep", "innkeep_core", "innkeep_adapters"];

/// How much the Innkeep crates report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Errors,
    Warnings,
    Requests,
    Workflow,
    Everything,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Errors;
        }
        match args.verbose {
            0 => Self::Warnings,
            1 => Self::Requests,
            2 => Self::Workflow,
            _ => Self::Everything,
        }
    }

    fn level(self) -> &'static str {
        match self {
            Self::Errors => "error",
            Self::Warnings => "warn",
            Self::Requests => "info",
            Self::Workflow => "debug",
            Self::Everything => "trace",
        }
    }

    fn shows_targets(self) -> bool {
        matches!(self, Self::Workflow | Self::Everything)
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity.shows_targets())
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter(verbosity)?)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn filter(verbosity: Verbosity) -> anyhow::Result<EnvFilter> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }
    let mut filter = EnvFilter::new("off");
    for directive in directives(verbosity) {
        let directive: Directive = directive.parse()?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

fn directives(verbosity: Verbosity) -> Vec<String> {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={}", verbosity.level()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
            api_url: None,
        }
    }

    #[test]
    fn no_flags_reports_warnings() {
        assert_eq!(Verbosity::from_args(&flags(0, false)), Verbosity::Warnings);
    }

    #[test]
    fn each_v_reveals_more_of_the_workflow() {
        let seen: Vec<_> = (1..=4)
            .map(|n| Verbosity::from_args(&flags(n, false)))
            .collect();
        assert_eq!(
            seen,
            [
                Verbosity::Requests,
                Verbosity::Workflow,
                Verbosity::Everything,
                Verbosity::Everything
            ]
        );
    }

    #[test]
    fn quiet_means_errors_only() {
        assert_eq!(Verbosity::from_args(&flags(0, true)), Verbosity::Errors);
        assert_eq!(Verbosity::from_args(&flags(2, true)), Verbosity::Errors);
    }

    #[test]
    fn targets_appear_from_workflow_level() {
        assert!(!Verbosity::Requests.shows_targets());
        assert!(Verbosity::Workflow.shows_targets());
    }

    #[test]
    fn every_innkeep_crate_gets_a_directive() {
        assert_eq!(
            directives(Verbosity::Requests),
            [
                "innkeep=info",
                "innkeep_core=info",
                "innkeep_adapters=info"
            ]
        );
    }

    #[test]
    fn directives_parse() {
        for directive in directives(Verbosity::Everything) {
            assert!(directive.parse::<Directive>().is_ok(), "{directive}");
        }
    }
}
