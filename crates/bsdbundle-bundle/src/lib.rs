//! # bsdbundle-bundle
//!
//! Prepares a Linux-generated OCI runtime bundle for a BSD-family runtime.
//!
//! The bundle generator emits default mounts (`/proc`, `/sys`, `/dev/pts`,
//! ...) whose filesystem types do not exist outside Linux. This crate
//! removes exact copies of those defaults from `config.json` and leaves
//! every other field of the document alone.
//!
//! ```no_run
//! use std::path::Path;
//!
//! bsdbundle_bundle::filter_incompatible_mounts(Path::new("/run/bundles/web"))?;
//! # Ok::<(), bsdbundle_common::error::BundleError>(())
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod compare;
pub mod denylist;
pub mod filter;
pub mod persist;
pub mod spec;

pub use filter::{FilterReport, filter_bundle, filter_incompatible_mounts, filter_mounts};
