//! `bsdbundle plan` — Show the mounts `filter` would remove.

use std::path::PathBuf;

use bsdbundle_common::config::FilterOptions;
use bsdbundle_common::constants::CONFIG_FILE_NAME;
use clap::Args;

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Bundle directory containing the runtime configuration.
    pub bundle: PathBuf,

    /// Name of the configuration file inside the bundle.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config_file: String,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `plan` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or parsed, or if
/// the JSON report cannot be encoded.
pub fn execute(args: &PlanArgs) -> anyhow::Result<()> {
    let options = FilterOptions {
        config_file: args.config_file.clone(),
        dry_run: true,
        ..FilterOptions::default()
    };
    let report = bsdbundle_bundle::filter_bundle(&args.bundle, &options)?;
    if args.json {
        println!("{}", crate::output::report_json(&report)?);
        return Ok(());
    }

    println!("Mount plan for: {}", report.config_path.display());
    println!();
    if report.removed.is_empty() {
        println!("  no Linux default mounts found, nothing to do");
        return Ok(());
    }
    for m in &report.removed {
        println!("  - {m}");
    }
    println!();
    println!(
        "{} to remove, {} to keep",
        report.removed.len(),
        report.retained
    );
    Ok(())
}
