//! Atomic replacement of an existing file.
//!
//! The new content goes to a temporary file in the same directory, which is
//! then renamed over the target. Readers see either the old or the new
//! content, never a truncated file.

use std::fs::{File, Metadata};
use std::io::Write;
use std::path::Path;

use bsdbundle_common::error::{BundleError, Result};

/// Replaces the content of `path` with `contents`, keeping its permissions.
///
/// A symlinked `path` is resolved first, so the file it points at is
/// replaced and the link stays. Ownership is carried over when the process
/// is allowed to set it.
///
/// # Errors
///
/// Returns [`BundleError::Io`] if the target cannot be inspected or if the
/// temporary file cannot be created, written, synced or renamed. On error
/// the target is left as it was.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let target = std::fs::canonicalize(path).map_err(|e| BundleError::io(path, e))?;
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    replace_file_via(&target, dir, contents)?;

    sync_dir(dir);
    tracing::debug!(path = %target.display(), bytes = contents.len(), "replaced file");
    Ok(())
}

/// Stages `contents` in `staging` and renames the result over `target`.
fn replace_file_via(target: &Path, staging: &Path, contents: &[u8]) -> Result<()> {
    let metadata = std::fs::metadata(target).map_err(|e| BundleError::io(target, e))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".bsdbundle.")
        .tempfile_in(staging)
        .map_err(|e| BundleError::io(staging, e))?;
    tmp.write_all(contents)
        .map_err(|e| BundleError::io(tmp.path(), e))?;
    tmp.as_file()
        .set_permissions(metadata.permissions())
        .map_err(|e| BundleError::io(tmp.path(), e))?;
    copy_ownership(tmp.as_file(), &metadata, tmp.path());
    tmp.as_file()
        .sync_all()
        .map_err(|e| BundleError::io(tmp.path(), e))?;

    let _ = tmp
        .persist(target)
        .map_err(|e| BundleError::io(target, e.error))?;
    Ok(())
}

/// Gives the staged file the owner and group of the original. Only root can
/// hand a file to another user, so a refusal is logged and the new file
/// keeps the caller's ownership.
#[cfg(unix)]
fn copy_ownership(file: &File, original: &Metadata, path: &Path) {
    use std::os::unix::fs::MetadataExt;

    let Ok(current) = file.metadata() else {
        return;
    };
    if current.uid() == original.uid() && current.gid() == original.gid() {
        return;
    }
    if let Err(e) = std::os::unix::fs::fchown(file, Some(original.uid()), Some(original.gid())) {
        tracing::warn!(
            path = %path.display(),
            uid = original.uid(),
            gid = original.gid(),
            error = %e,
            "could not preserve file ownership"
        );
    }
}

#[cfg(not(unix))]
const fn copy_ownership(_file: &File, _original: &Metadata, _path: &Path) {}

/// Flushes the rename to disk. The content is already in place, so a
/// failure here is only logged.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        tracing::warn!(path = %dir.display(), error = %e, "failed to sync directory");
    }
}

#[cfg(not(unix))]
const fn sync_dir(_dir: &Path) {}
