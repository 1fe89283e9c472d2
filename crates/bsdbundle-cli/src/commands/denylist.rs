//! `bsdbundle denylist` — Print the Linux default mounts that are removed.

use clap::Args;

/// Arguments for the `denylist` subcommand.
#[derive(Args, Debug)]
pub struct DenylistArgs {
    /// Print the definitions as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `denylist` command.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn execute(args: &DenylistArgs) -> anyhow::Result<()> {
    let entries: Vec<_> = bsdbundle_bundle::denylist::entries().collect();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", crate::output::mount_table(entries));
    }
    Ok(())
}
