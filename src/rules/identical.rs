//! Untranslated value detection rule.
//!
//! Detects translated values that are identical to the reference value (after
//! trimming surrounding whitespace), which may indicate that the text was not
//! translated.

use crate::{core::CommonString, issues::IdenticalIssue, utils::strip_whitespace};

pub fn check_identical(common: &[CommonString<'_>]) -> Vec<IdenticalIssue> {
    common
        .iter()
        .filter(|entry| {
            let zh = strip_whitespace(entry.zh);
            !zh.is_empty() && zh == strip_whitespace(entry.en)
        })
        .map(|entry| IdenticalIssue {
            key: entry.key.to_string(),
            en: entry.en.to_string(),
            zh: entry.zh.to_string(),
        })
        .collect()
}
