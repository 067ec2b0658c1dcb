//! Report files written by the `audit` and `missing` commands.
//!
//! - `json`: JSON rendering (report files and the stdout status line)
//! - `markdown`: Markdown rendering of an audit report
//!
//! Every file is overwritten wholesale; no trailing newline is added.

pub mod json;
pub mod markdown;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{core::MissingValue, issues::AuditReport};

pub use json::{render_snippet, to_ascii_json_line, to_pretty_json};
pub use markdown::render_markdown;

/// Write the complete audit report as pretty JSON.
pub fn write_audit_json(report: &AuditReport, path: &Path) -> Result<()> {
    write_json(report, path)
}

/// Write the condensed Markdown report.
pub fn write_audit_markdown(
    report: &AuditReport,
    path: &Path,
    locale: &str,
    limit: usize,
) -> Result<()> {
    write_text(path, &render_markdown(report, locale, limit))
}

/// Write the missing value lookup table as pretty JSON.
pub fn write_missing_values(values: &[MissingValue], path: &Path) -> Result<()> {
    write_json(values, path)
}

/// Write the resolved missing values as `"key": value,` lines.
///
/// Returns the number of lines written.
pub fn write_missing_snippet(values: &[MissingValue], path: &Path) -> Result<usize> {
    let (snippet, count) = render_snippet(values)?;
    write_text(path, &snippet)?;
    Ok(count)
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    write_text(path, &to_pretty_json(value)?)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
