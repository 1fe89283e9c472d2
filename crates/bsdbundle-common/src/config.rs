//! Options controlling a filtering pass.

use serde::{Deserialize, Serialize};

/// Parameters of one Mount Filter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// File name of the configuration inside the bundle directory.
    pub config_file: String,
    /// Compute the result without touching the file.
    pub dry_run: bool,
    /// Write the rewritten document with indentation.
    pub pretty: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            config_file: crate::constants::CONFIG_FILE_NAME.to_owned(),
            dry_run: false,
            pretty: false,
        }
    }
}
