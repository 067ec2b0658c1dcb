use std::path::PathBuf;

use crate::issues::AuditSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Audit(AuditOutcome),
    Missing(MissingOutcome),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AuditOutcome {
    pub summary: AuditSummary,
    /// Label of the translated locale (e.g., "zh-tw").
    pub locale: String,
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

#[derive(Debug)]
pub struct MissingOutcome {
    pub out_path: PathBuf,
    pub entry_count: usize,
    /// Keys that could not be resolved against the reference.
    pub failed_count: usize,
    /// Paste snippet file and its line count, when requested.
    pub snippet: Option<(PathBuf, usize)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running transaudit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (findings are reported, not enforced).
    pub exit_on_errors: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, error_count: usize, exit_on_errors: bool) -> Self {
        Self {
            summary,
            error_count,
            exit_on_errors,
        }
    }
}
