//! Placeholder mismatch detection rule.
//!
//! A placeholder is a brace-delimited interpolation token such as `{name}` or
//! `{count, plural, one {# item}`. The translated string must carry the same
//! set of tokens as the reference; order and repetition are ignored.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{core::CommonString, issues::PlaceholderMismatchIssue};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

/// Distinct placeholder tokens of `text`, sorted.
pub fn extract_placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Check every common string for differing placeholder sets.
pub fn check_placeholder_mismatch(common: &[CommonString<'_>]) -> Vec<PlaceholderMismatchIssue> {
    common
        .iter()
        .filter_map(|entry| {
            let en_placeholders = extract_placeholders(entry.en);
            let zh_placeholders = extract_placeholders(entry.zh);
            if en_placeholders == zh_placeholders {
                return None;
            }
            Some(PlaceholderMismatchIssue {
                key: entry.key.to_string(),
                en_placeholders: en_placeholders.into_iter().map(String::from).collect(),
                zh_placeholders: zh_placeholders.into_iter().map(String::from).collect(),
                en: entry.en.to_string(),
                zh: entry.zh.to_string(),
            })
        })
        .collect()
}
