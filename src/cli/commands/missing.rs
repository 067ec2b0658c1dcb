use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::{
    CommandResult, CommandSummary, MissingOutcome,
    helper::{apply_missing_args, config_path, load_project_config},
};
use crate::{
    cli::args::MissingCommand,
    config::Config,
    core::{parsers::json::load_tree, resolve_missing},
    report::{write_missing_snippet, write_missing_values},
};

/// The part of an audit report the `missing` command reads.
#[derive(Debug, Deserialize)]
struct AuditMissingKeys {
    missing_keys: Vec<String>,
}

pub fn missing(cmd: MissingCommand) -> Result<CommandResult> {
    let config = apply_missing_args(load_project_config()?, &cmd.args)?;
    missing_with_config(&config)
}

/// Resolve the missing keys of an audit report against the reference.
pub fn missing_with_config(config: &Config) -> Result<CommandResult> {
    let reference_path = config_path(&config.reference);
    let audit_path = config_path(&config.audit_json);
    let out_path = config_path(&config.missing_values);

    let tree = load_tree(&reference_path)?;
    let keys = read_missing_keys(&audit_path)?;
    debug!("Resolving {} missing keys", keys.len());

    let values = resolve_missing(&tree, &keys);
    write_missing_values(&values, &out_path)?;

    let snippet = match &config.missing_snippet {
        Some(snippet) => {
            let snippet_path = config_path(snippet);
            let count = write_missing_snippet(&values, &snippet_path)?;
            Some((snippet_path, count))
        }
        None => None,
    };

    let failed_count = values.iter().filter(|v| v.is_error()).count();
    Ok(CommandResult::new(
        CommandSummary::Missing(MissingOutcome {
            out_path,
            entry_count: values.len(),
            failed_count,
            snippet,
        }),
        failed_count,
        false,
    ))
}

fn read_missing_keys(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read audit report: {:?}", path))?;
    let audit: AuditMissingKeys = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse audit report: {:?}", path))?;
    Ok(audit.missing_keys)
}
