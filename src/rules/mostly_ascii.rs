//! Mostly-ASCII detection rule.
//!
//! A translated value whose characters are overwhelmingly ASCII and which
//! contains Latin letters is likely untranslated or only partly translated.

use crate::{
    core::CommonString,
    issues::MostlyAsciiIssue,
    utils::{ascii_ratio, contains_latin_letter, strip_whitespace},
};

/// Default ratio a value must exceed to be reported.
pub const DEFAULT_ASCII_THRESHOLD: f64 = 0.85;

/// Check common strings for mostly-ASCII translated values.
///
/// The ratio is computed on the trimmed translated value. Results are sorted by
/// ratio, highest first; equal ratios keep key order.
pub fn check_mostly_ascii(common: &[CommonString<'_>], threshold: f64) -> Vec<MostlyAsciiIssue> {
    let mut issues: Vec<MostlyAsciiIssue> = common
        .iter()
        .filter_map(|entry| {
            let zh = strip_whitespace(entry.zh);
            if zh.is_empty() {
                return None;
            }
            let ratio = ascii_ratio(zh);
            (ratio > threshold && contains_latin_letter(zh)).then(|| MostlyAsciiIssue {
                key: entry.key.to_string(),
                en: entry.en.to_string(),
                zh: entry.zh.to_string(),
                ascii_ratio: ratio,
            })
        })
        .collect();

    issues.sort_by(|a, b| b.ascii_ratio.total_cmp(&a.ascii_ratio));
    issues
}
