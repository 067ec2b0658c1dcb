use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::{LocaleMessages, parsers::json::parse_locale_file};

/// A key path whose value is a string in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonString<'a> {
    pub key: &'a str,
    /// Raw reference value.
    pub en: &'a str,
    /// Raw translated value.
    pub zh: &'a str,
}

/// Flattened reference and translated locales for one audit run.
///
/// Both sides are loaded once and never mutated. Rules read from this context
/// and return their own issue lists.
#[derive(Debug, Clone)]
pub struct AuditContext {
    pub reference: LocaleMessages,
    pub translated: LocaleMessages,
}

impl AuditContext {
    pub fn new(reference: LocaleMessages, translated: LocaleMessages) -> Self {
        Self {
            reference,
            translated,
        }
    }

    /// Load and flatten both locale files.
    ///
    /// Fails on the first file that is missing or not valid JSON.
    pub fn load(reference_path: &Path, translated_path: &Path) -> Result<Self> {
        let reference = parse_locale_file(reference_path)?.messages;
        let translated = parse_locale_file(translated_path)?.messages;
        debug!(
            "Loaded {} reference and {} translated leaves",
            reference.len(),
            translated.len()
        );
        Ok(Self::new(reference, translated))
    }

    /// Key paths present in both locales with string values on both sides,
    /// sorted by key path.
    pub fn common_strings(&self) -> Vec<CommonString<'_>> {
        self.reference
            .entries
            .iter()
            .filter_map(|(key, en)| {
                let en = en.as_str()?;
                let zh = self.translated.get_str(key)?;
                Some(CommonString { key, en, zh })
            })
            .collect()
    }
}
