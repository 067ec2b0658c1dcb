//! Key set differences between the reference and the translated locale.
//!
//! - missing: key paths of the reference absent from the translation
//! - extra: key paths of the translation absent from the reference
//!
//! With `ignore_case`, key paths are compared lowercased. When several paths
//! of one locale lowercase to the same string, the first in key path order
//! stands for all of them, and results report that path's original casing.

use std::collections::BTreeMap;

use crate::core::LocaleMessages;

/// Key paths in `reference` that `translated` lacks, sorted.
pub fn check_missing_keys(
    reference: &LocaleMessages,
    translated: &LocaleMessages,
    ignore_case: bool,
) -> Vec<String> {
    difference(reference, translated, ignore_case)
}

/// Key paths in `translated` that `reference` lacks, sorted.
pub fn check_extra_keys(
    reference: &LocaleMessages,
    translated: &LocaleMessages,
    ignore_case: bool,
) -> Vec<String> {
    difference(translated, reference, ignore_case)
}

fn difference(left: &LocaleMessages, right: &LocaleMessages, ignore_case: bool) -> Vec<String> {
    if !ignore_case {
        // Entries are a BTreeMap, so the result comes out sorted.
        return left
            .keys()
            .filter(|key| !right.contains_key(key))
            .cloned()
            .collect();
    }

    let right_index = canonical_index(right);
    let mut keys: Vec<String> = canonical_index(left)
        .into_iter()
        .filter(|(canonical, _)| !right_index.contains_key(canonical))
        .map(|(_, original)| original.to_string())
        .collect();
    keys.sort();
    keys
}

/// Lowercased key path to the first original key path producing it.
fn canonical_index(messages: &LocaleMessages) -> BTreeMap<String, &str> {
    let mut index = BTreeMap::new();
    for key in messages.keys() {
        index.entry(key.to_lowercase()).or_insert(key.as_str());
    }
    index
}
