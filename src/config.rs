use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::rules::{AuditOptions, DEFAULT_ASCII_THRESHOLD};

pub const CONFIG_FILE_NAME: &str = ".transauditrc.json";

/// Settings of a project, read from `.transauditrc.json`.
///
/// Relative file paths in a config file are relative to the directory holding
/// that file, so commands run from a subdirectory read the same files.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Reference (source language) locale file.
    #[serde(default = "default_reference")]
    pub reference: String,
    /// Translated locale file.
    #[serde(default = "default_translated")]
    pub translated: String,
    /// Complete audit report, read back by the `missing` command.
    #[serde(default = "default_audit_json")]
    pub audit_json: String,
    #[serde(default = "default_audit_markdown")]
    pub audit_markdown: String,
    #[serde(default = "default_missing_values")]
    pub missing_values: String,
    /// A translated value is reported as mostly ASCII above this ratio.
    #[serde(default = "default_ascii_threshold")]
    pub ascii_threshold: f64,
    /// Entries per list in the Markdown report.
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
    /// Exit with failure when the audit finds missing keys or placeholder
    /// mismatches.
    #[serde(default)]
    pub strict: bool,
    /// Compare key paths case-insensitively when looking for missing and
    /// extra keys.
    #[serde(default)]
    pub ignore_case: bool,
    /// Optional `"key": value,` snippet of resolved missing keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_snippet: Option<String>,
}

fn default_reference() -> String {
    "_en.json".to_string()
}

fn default_translated() -> String {
    "zh-tw.json".to_string()
}

fn default_audit_json() -> String {
    "translation_audit.json".to_string()
}

fn default_audit_markdown() -> String {
    "translation_audit.md".to_string()
}

fn default_missing_values() -> String {
    "missing_en_values.json".to_string()
}

fn default_ascii_threshold() -> f64 {
    DEFAULT_ASCII_THRESHOLD
}

fn default_report_limit() -> usize {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            translated: default_translated(),
            audit_json: default_audit_json(),
            audit_markdown: default_audit_markdown(),
            missing_values: default_missing_values(),
            ascii_threshold: default_ascii_threshold(),
            report_limit: default_report_limit(),
            strict: false,
            ignore_case: false,
            missing_snippet: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the ASCII threshold is outside `(0, 1]` or the
    /// report limit is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.ascii_threshold > 0.0 && self.ascii_threshold <= 1.0) {
            bail!(
                "Invalid 'asciiThreshold': {} (expected a ratio in (0, 1])",
                self.ascii_threshold
            );
        }

        if self.report_limit == 0 {
            bail!("Invalid 'reportLimit': must be at least 1");
        }

        Ok(())
    }

    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            ascii_threshold: self.ascii_threshold,
            ignore_case: self.ignore_case,
        }
    }

    /// Prefix every relative file path with `base`.
    pub fn rebase_paths(&mut self, base: &Path) {
        for value in [
            &mut self.reference,
            &mut self.translated,
            &mut self.audit_json,
            &mut self.audit_markdown,
            &mut self.missing_values,
        ] {
            rebase(value, base);
        }
        if let Some(snippet) = &mut self.missing_snippet {
            rebase(snippet, base);
        }
    }
}

fn rebase(value: &mut String, base: &Path) {
    let path = Path::new(value.as_str());
    if path.is_absolute() {
        return;
    }
    let rebased = base.join(path).to_string_lossy().to_string();
    *value = rebased;
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
