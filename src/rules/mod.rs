//! Rule implementations for transaudit.
//!
//! This module contains pure functions that check for translation issues.
//! Each function takes only the specific inputs it needs and returns a
//! specific issue type; [`run_audit`] runs them all over an [`AuditContext`].
//!
//! ## Module Structure
//!
//! - `key_diff`: Missing and extra key paths
//! - `placeholder`: Placeholder token mismatches
//! - `identical`: Values identical to the reference
//! - `mostly_ascii`: Values that are mostly ASCII

pub mod identical;
pub mod key_diff;
pub mod mostly_ascii;
pub mod placeholder;

use tracing::debug;

use crate::{
    core::AuditContext,
    issues::{AuditReport, AuditSummary},
};

pub use identical::check_identical;
pub use key_diff::{check_extra_keys, check_missing_keys};
pub use mostly_ascii::{DEFAULT_ASCII_THRESHOLD, check_mostly_ascii};
pub use placeholder::{check_placeholder_mismatch, extract_placeholders};

/// Settings that change what the rules report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditOptions {
    /// A translated value is reported as mostly ASCII above this ratio.
    pub ascii_threshold: f64,
    /// Compare key paths case-insensitively for missing and extra keys.
    pub ignore_case: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            ascii_threshold: DEFAULT_ASCII_THRESHOLD,
            ignore_case: false,
        }
    }
}

/// Run every rule and assemble the complete report.
pub fn run_audit(ctx: &AuditContext, options: &AuditOptions) -> AuditReport {
    let missing_keys = check_missing_keys(&ctx.reference, &ctx.translated, options.ignore_case);
    let extra_keys = check_extra_keys(&ctx.reference, &ctx.translated, options.ignore_case);

    let common = ctx.common_strings();
    debug!("{} key paths hold strings in both locales", common.len());

    let placeholder_mismatch = check_placeholder_mismatch(&common);
    let identical_to_en = check_identical(&common);
    let mostly_ascii = check_mostly_ascii(&common, options.ascii_threshold);

    let summary = AuditSummary {
        en_leaf_count: ctx.reference.len(),
        zh_leaf_count: ctx.translated.len(),
        missing_keys_count: missing_keys.len(),
        extra_keys_count: extra_keys.len(),
        placeholder_mismatch_count: placeholder_mismatch.len(),
        identical_to_en_count: identical_to_en.len(),
        mostly_ascii_count: mostly_ascii.len(),
    };

    AuditReport {
        summary,
        missing_keys,
        extra_keys,
        placeholder_mismatch,
        identical_to_en,
        mostly_ascii,
    }
}
