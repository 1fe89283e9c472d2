//! In-memory view of a bundle's `config.json`.
//!
//! Only the mount list is decoded. The rest of the document is held as an
//! insertion-ordered JSON object and written back as it was read, with
//! `mounts` kept at its original position.

use std::path::Path;

use bsdbundle_common::constants::MOUNTS_KEY;
use bsdbundle_common::error::{BundleError, Result};
use bsdbundle_common::types::Mount;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Typed view of the mount list, decoded straight from the bytes so errors
/// carry a line and column.
#[derive(Deserialize)]
struct MountsView {
    #[serde(default)]
    mounts: Option<Vec<Mount>>,
}

/// A parsed OCI runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    document: Map<String, Value>,
    mounts: Vec<Mount>,
}

impl BundleConfig {
    /// Decodes a configuration document.
    ///
    /// A missing or `null` `mounts` key is an empty mount list.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object or if `mounts` is
    /// not an array of mount objects.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let document: Map<String, Value> = serde_json::from_slice(bytes)?;
        let view: MountsView = serde_json::from_slice(bytes)?;
        Ok(Self {
            document,
            mounts: view.mounts.unwrap_or_default(),
        })
    }

    /// Reads and decodes the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Io`] if the file cannot be read and
    /// [`BundleError::Parse`] if its content is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading bundle configuration");
        let bytes = std::fs::read(path).map_err(|e| BundleError::io(path, e))?;
        Self::from_slice(&bytes).map_err(|source| BundleError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the declared mounts in document order.
    #[must_use]
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Replaces the mount list.
    ///
    /// # Errors
    ///
    /// Returns an error if the mounts cannot be encoded.
    pub fn set_mounts(&mut self, mounts: Vec<Mount>) -> Result<()> {
        let encoded = serde_json::to_value(&mounts)?;
        if let Some(slot) = self.document.get_mut(MOUNTS_KEY) {
            *slot = encoded;
        } else if !mounts.is_empty() {
            let _ = self.document.insert(MOUNTS_KEY.to_owned(), encoded);
        }
        self.mounts = mounts;
        Ok(())
    }

    /// Returns a top-level field of the document.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Encodes the full document.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Serialize`] if encoding fails.
    pub fn to_vec(&self, pretty: bool) -> Result<Vec<u8>> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(&self.document)?
        } else {
            serde_json::to_vec(&self.document)?
        };
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ociVersion": "1.0.2",
        "process": {"args": ["sh"], "cwd": "/"},
        "mounts": [
            {"destination": "/proc", "type": "proc", "source": "proc", "options": ["nosuid", "noexec", "nodev"]},
            {"destination": "/data", "type": "nullfs", "source": "/srv/data"}
        ],
        "root": {"path": "rootfs"}
    }"#;

    #[test]
    fn from_slice_decodes_mounts_in_order() {
        let cfg = BundleConfig::from_slice(SAMPLE.as_bytes()).expect("parse");
        let dests: Vec<&str> = cfg.mounts().iter().map(|m| m.destination.as_str()).collect();
        assert_eq!(dests, ["/proc", "/data"]);
        assert_eq!(cfg.mounts()[1].typ, "nullfs");
    }

    #[test]
    fn missing_mounts_is_empty() {
        let cfg = BundleConfig::from_slice(br#"{"ociVersion":"1.0.2"}"#).expect("parse");
        assert!(cfg.mounts().is_empty());
    }

    #[test]
    fn null_mounts_is_empty() {
        let cfg = BundleConfig::from_slice(br#"{"mounts":null}"#).expect("parse");
        assert!(cfg.mounts().is_empty());
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(BundleConfig::from_slice(b"[]").is_err());
        assert!(BundleConfig::from_slice(b"\"config\"").is_err());
    }

    #[test]
    fn wrongly_shaped_mounts_are_rejected() {
        assert!(BundleConfig::from_slice(br#"{"mounts":"/proc"}"#).is_err());
        assert!(BundleConfig::from_slice(br#"{"mounts":[{"destination":5}]}"#).is_err());
        assert!(BundleConfig::from_slice(br#"{"mounts":[{"options":"ro","destination":"/x"}]}"#).is_err());
    }

    #[test]
    fn malformed_mount_error_points_at_its_line() {
        let raw = "{\n  \"ociVersion\": \"1.0.2\",\n  \"mounts\": [{\"destination\": 5}]\n}";
        let err = BundleConfig::from_slice(raw.as_bytes()).unwrap_err();
        assert_eq!(err.line(), 3);
        assert!(err.column() > 0);
    }

    #[test]
    fn set_mounts_keeps_key_position() {
        let mut cfg = BundleConfig::from_slice(SAMPLE.as_bytes()).expect("parse");
        let kept = vec![cfg.mounts()[1].clone()];
        cfg.set_mounts(kept).expect("set");

        let out = String::from_utf8(cfg.to_vec(false).expect("encode")).expect("utf8");
        let process = out.find("\"process\"").expect("process");
        let mounts = out.find("\"mounts\"").expect("mounts");
        let root = out.find("\"root\"").expect("root");
        assert!(process < mounts && mounts < root);
        assert!(!out.contains("/proc"));
        assert!(out.contains("/srv/data"));
    }

    #[test]
    fn pass_through_fields_survive_encoding() {
        let mut cfg = BundleConfig::from_slice(SAMPLE.as_bytes()).expect("parse");
        cfg.set_mounts(Vec::new()).expect("set");
        let again = BundleConfig::from_slice(&cfg.to_vec(true).expect("encode")).expect("reparse");
        assert_eq!(again.get("process"), cfg.get("process"));
        assert_eq!(again.get("root"), Some(&serde_json::json!({"path": "rootfs"})));
        assert_eq!(again.get("mounts"), Some(&serde_json::json!([])));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = BundleConfig::load(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, BundleError::Io { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"mounts\": [").expect("write");
        let err = BundleConfig::load(&path).unwrap_err();
        assert!(err.is_parse());
    }
}
