//! CLI command definitions and dispatch.

pub mod denylist;
pub mod filter;
pub mod plan;

use bsdbundle_common::constants::BIN_NAME;
use clap::{Parser, Subcommand, ValueEnum};

/// bsdbundle — prepare Linux-generated OCI bundles for BSD runtimes.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Format of diagnostic output on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, env = "BSDBUNDLE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Diagnostic log encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove Linux default mounts from a bundle's configuration.
    Filter(filter::FilterArgs),
    /// Show which mounts `filter` would remove, without changing anything.
    Plan(plan::PlanArgs),
    /// Print the Linux default mounts that are removed.
    Denylist(denylist::DenylistArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Filter(args) => filter::execute(&args),
        Command::Plan(args) => plan::execute(&args),
        Command::Denylist(args) => denylist::execute(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn command_name_is_binary_name() {
        use clap::CommandFactory;
        assert_eq!(Cli::command().get_name(), BIN_NAME);
    }

    #[test]
    fn filter_parses_bundle_and_flags() {
        let cli = Cli::try_parse_from(["bsdbundle", "filter", "/run/bundles/web", "--pretty"])
            .expect("parse");
        match cli.command {
            Command::Filter(args) => {
                assert_eq!(args.bundle.to_str(), Some("/run/bundles/web"));
                assert!(args.pretty);
                assert_eq!(args.config_file, "config.json");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn log_format_is_global() {
        let cli = Cli::try_parse_from(["bsdbundle", "denylist", "--log-format", "json"])
            .expect("parse");
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
