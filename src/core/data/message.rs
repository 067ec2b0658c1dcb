use std::collections::BTreeMap;

use super::node::Leaf;

/// All leaves of one locale file, keyed by key path.
///
/// This is the flattened form of a localization tree. Entries are ordered by
/// key path (byte order, which equals code point order), so iteration is
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct LocaleMessages {
    /// Locale label (e.g., "en", "zh-tw").
    pub locale: String,
    /// All leaves, keyed by key path.
    pub entries: BTreeMap<String, Leaf>,
}

impl LocaleMessages {
    /// Create a new, empty LocaleMessages.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Get a leaf by key path.
    pub fn get(&self, key: &str) -> Option<&Leaf> {
        self.entries.get(key)
    }

    /// Get a leaf by key path if it holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Leaf::as_str)
    }

    /// Check if a key path exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all key paths in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Get the number of leaves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
