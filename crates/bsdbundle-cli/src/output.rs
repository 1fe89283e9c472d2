//! Formatted output helpers for CLI commands.

use std::fmt::Write;

use bsdbundle_bundle::FilterReport;
use bsdbundle_common::types::Mount;

/// One-line outcome of a filtering pass.
#[must_use]
pub fn summarize(report: &FilterReport) -> String {
    if report.written {
        format!(
            "{}: removed {} mount(s), {} kept",
            report.config_path.display(),
            report.removed.len(),
            report.retained
        )
    } else {
        format!("{}: unchanged", report.config_path.display())
    }
}

/// Encodes a filter report as indented JSON.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn report_json(report: &FilterReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Renders mounts as a tab-separated table with a header row.
#[must_use]
pub fn mount_table<'a>(mounts: impl IntoIterator<Item = &'a Mount>) -> String {
    let mut out = String::from("DESTINATION\tTYPE\tSOURCE\tOPTIONS\n");
    for m in mounts {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            m.destination,
            m.typ,
            m.source,
            m.options.join(",")
        );
    }
    out
}
