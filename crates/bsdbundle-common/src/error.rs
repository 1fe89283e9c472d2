//! Unified error types for the bsdbundle workspace.
//!
//! Every failure aborts the filtering pass and is handed to the caller
//! unchanged in cause. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Reading, writing, syncing or renaming a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The bundle configuration is not a well-formed document of the
    /// expected shape.
    #[error("malformed bundle configuration {path}: {source}")]
    Parse {
        /// Configuration file that failed to parse.
        path: PathBuf,
        /// Underlying decoding error.
        source: serde_json::Error,
    },

    /// The in-memory configuration could not be encoded.
    #[error("serialization error: {source}")]
    Serialize {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl BundleError {
    /// Builds a [`BundleError::Io`] bound to `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for decoding failures of the configuration document.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BundleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let err = BundleError::io(
            "/bundles/web/config.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/bundles/web/config.json"));
        assert!(msg.contains("gone"));
        assert!(!err.is_parse());
    }

    #[test]
    fn parse_error_is_flagged() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BundleError::Parse {
            path: PathBuf::from("config.json"),
            source,
        };
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("malformed bundle configuration"));
    }
}
