//! Fixed file names and identifiers.

/// Name of the OCI runtime configuration file at the root of a bundle.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level key holding the mount list inside `config.json`.
pub const MOUNTS_KEY: &str = "mounts";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "bsdbundle";
