//! Issue types for translation audit results.
//!
//! Each issue record is self-contained with all information needed by the
//! JSON report, the Markdown report and the terminal summary. Field names are
//! part of the `translation_audit.json` format.

use serde::{Deserialize, Serialize};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ExtraKey,
    PlaceholderMismatch,
    IdenticalToReference,
    MostlyAscii,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::MissingKey,
        Rule::ExtraKey,
        Rule::PlaceholderMismatch,
        Rule::IdenticalToReference,
        Rule::MostlyAscii,
    ];

    /// Missing keys and broken placeholders break the translated UI; the
    /// other findings are heuristics.
    pub fn severity(self) -> Severity {
        match self {
            Rule::MissingKey | Rule::PlaceholderMismatch => Severity::Error,
            Rule::ExtraKey | Rule::IdenticalToReference | Rule::MostlyAscii => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ExtraKey => write!(f, "extra-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::IdenticalToReference => write!(f, "identical-to-en"),
            Rule::MostlyAscii => write!(f, "mostly-ascii"),
        }
    }
}

// ============================================================
// Issue Types - Common string leaves
// ============================================================

/// Placeholder tokens differ between reference and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderMismatchIssue {
    pub key: String,
    /// Distinct placeholders of the reference value, sorted.
    pub en_placeholders: Vec<String>,
    /// Distinct placeholders of the translated value, sorted.
    pub zh_placeholders: Vec<String>,
    pub en: String,
    pub zh: String,
}

/// Translated value is the reference value, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdenticalIssue {
    pub key: String,
    pub en: String,
    pub zh: String,
}

/// Translated value is mostly ASCII and contains Latin letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostlyAsciiIssue {
    pub key: String,
    pub en: String,
    pub zh: String,
    pub ascii_ratio: f64,
}

// ============================================================
// Audit Report
// ============================================================

/// Counts of one audit run, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub en_leaf_count: usize,
    pub zh_leaf_count: usize,
    pub missing_keys_count: usize,
    pub extra_keys_count: usize,
    pub placeholder_mismatch_count: usize,
    pub identical_to_en_count: usize,
    pub mostly_ascii_count: usize,
}

impl AuditSummary {
    /// Field name and value pairs, in serialization order.
    pub fn fields(&self) -> [(&'static str, usize); 7] {
        [
            ("en_leaf_count", self.en_leaf_count),
            ("zh_leaf_count", self.zh_leaf_count),
            ("missing_keys_count", self.missing_keys_count),
            ("extra_keys_count", self.extra_keys_count),
            ("placeholder_mismatch_count", self.placeholder_mismatch_count),
            ("identical_to_en_count", self.identical_to_en_count),
            ("mostly_ascii_count", self.mostly_ascii_count),
        ]
    }

    /// Number of findings for a rule.
    pub fn count(&self, rule: Rule) -> usize {
        match rule {
            Rule::MissingKey => self.missing_keys_count,
            Rule::ExtraKey => self.extra_keys_count,
            Rule::PlaceholderMismatch => self.placeholder_mismatch_count,
            Rule::IdenticalToReference => self.identical_to_en_count,
            Rule::MostlyAscii => self.mostly_ascii_count,
        }
    }

    /// Number of findings with error severity.
    pub fn error_count(&self) -> usize {
        Rule::ALL
            .iter()
            .filter(|rule| rule.severity() == Severity::Error)
            .map(|rule| self.count(*rule))
            .sum()
    }
}

/// Complete result of comparing a translated locale against the reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub missing_keys: Vec<String>,
    pub extra_keys: Vec<String>,
    pub placeholder_mismatch: Vec<PlaceholderMismatchIssue>,
    pub identical_to_en: Vec<IdenticalIssue>,
    pub mostly_ascii: Vec<MostlyAsciiIssue>,
}
