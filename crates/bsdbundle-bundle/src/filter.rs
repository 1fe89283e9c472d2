//! Mount Filter: removes Linux default mounts from a bundle's configuration.
//!
//! Runs once per bundle, after the bundle is generated and before the
//! runtime is invoked. The caller must hold the bundle directory
//! exclusively for the duration of the call.

use std::path::{Path, PathBuf};

use bsdbundle_common::config::FilterOptions;
use bsdbundle_common::error::Result;
use bsdbundle_common::types::Mount;
use serde::Serialize;

use crate::denylist;
use crate::persist::replace_file;
use crate::spec::BundleConfig;

/// Outcome of one filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterReport {
    /// Configuration file that was examined. Empty when no bundle was given.
    pub config_path: PathBuf,
    /// Mounts that matched the denylist, in document order.
    pub removed: Vec<Mount>,
    /// Number of mounts left in the configuration.
    pub retained: usize,
    /// Whether the configuration file was rewritten.
    pub written: bool,
}

impl FilterReport {
    /// Returns `true` when at least one mount matched the denylist.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Splits `mounts` into the ones to keep and the exact Linux defaults.
///
/// Both halves keep their relative order.
pub fn filter_mounts<I>(mounts: I) -> (Vec<Mount>, Vec<Mount>)
where
    I: IntoIterator<Item = Mount>,
{
    mounts.into_iter().partition(|m| !denylist::is_incompatible(m))
}

/// Removes Linux-only default mounts from `<bundle>/config.json`.
///
/// An empty `bundle` path is accepted and does nothing. The file is only
/// rewritten when at least one mount was removed.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, parsed, encoded
/// or written back. The file is unchanged in every error case.
pub fn filter_incompatible_mounts(bundle: &Path) -> Result<()> {
    let _ = filter_bundle(bundle, &FilterOptions::default())?;
    Ok(())
}

/// Runs the Mount Filter with explicit options and reports what it did.
///
/// With [`FilterOptions::dry_run`] set, the report lists the mounts that
/// would be removed and the file is left untouched.
///
/// # Errors
///
/// See [`filter_incompatible_mounts`].
pub fn filter_bundle(bundle: &Path, options: &FilterOptions) -> Result<FilterReport> {
    if bundle.as_os_str().is_empty() {
        tracing::debug!("no bundle path given, skipping mount filter");
        return Ok(FilterReport::default());
    }

    let config_path = bundle.join(&options.config_file);
    let mut config = BundleConfig::load(&config_path)?;

    let original_len = config.mounts().len();
    let (retained, removed) = filter_mounts(config.mounts().iter().cloned());

    let mut report = FilterReport {
        config_path,
        removed,
        retained: retained.len(),
        written: false,
    };

    if retained.len() == original_len {
        tracing::debug!(
            path = %report.config_path.display(),
            mounts = original_len,
            "no incompatible mounts found"
        );
        return Ok(report);
    }

    for m in &report.removed {
        tracing::info!(
            path = %report.config_path.display(),
            destination = %m.destination,
            typ = %m.typ,
            dry_run = options.dry_run,
            "removing Linux default mount"
        );
    }

    if options.dry_run {
        return Ok(report);
    }

    config.set_mounts(retained)?;
    let bytes = config.to_vec(options.pretty)?;
    replace_file(&report.config_path, &bytes)?;
    report.written = true;

    tracing::info!(
        path = %report.config_path.display(),
        removed = report.removed.len(),
        retained = report.retained,
        "rewrote bundle configuration"
    );
    Ok(report)
}
