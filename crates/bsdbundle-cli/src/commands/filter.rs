//! `bsdbundle filter` — Remove Linux default mounts from a bundle.

use std::path::PathBuf;

use bsdbundle_common::config::FilterOptions;
use bsdbundle_common::constants::CONFIG_FILE_NAME;
use clap::Args;

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Bundle directory containing the runtime configuration.
    pub bundle: PathBuf,

    /// Name of the configuration file inside the bundle.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config_file: String,

    /// Indent the rewritten configuration.
    #[arg(long)]
    pub pretty: bool,
}

impl FilterArgs {
    /// Builds the library options for a real (writing) pass.
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            config_file: self.config_file.clone(),
            dry_run: false,
            pretty: self.pretty,
        }
    }
}

/// Executes the `filter` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, parsed or written.
pub fn execute(args: &FilterArgs) -> anyhow::Result<()> {
    tracing::info!(bundle = %args.bundle.display(), "filtering bundle mounts");
    let report = bsdbundle_bundle::filter_bundle(&args.bundle, &args.options())?;
    println!("{}", crate::output::summarize(&report));
    Ok(())
}
