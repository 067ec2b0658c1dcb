use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::{AuditArgs, CommonArgs, MissingArgs};
use crate::config::{Config, load_config};

/// Load the config file found from the working directory, if any.
pub fn load_project_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&cwd)
}

fn load_config_from(dir: &Path) -> Result<Config> {
    let result = load_config(dir)?;
    let mut config = result.config;
    match &result.path {
        Some(path) => {
            debug!("Using config {}", path.display());
            if let Some(base) = config_base(dir, path)
                && !base.as_os_str().is_empty()
            {
                debug!("Config paths are relative to {}", base.display());
                config.rebase_paths(&base);
            }
        }
        None => debug!("No config file found, using defaults"),
    }
    Ok(config)
}

/// Path from `dir` up to the directory holding `config_file`, as `../..`.
///
/// `None` when the config file is not in `dir` or one of its ancestors.
fn config_base(dir: &Path, config_file: &Path) -> Option<PathBuf> {
    let config_dir = config_file.parent()?;
    let below = dir.strip_prefix(config_dir).ok()?;
    Some(below.components().map(|_| "..").collect())
}

fn apply_common(config: &mut Config, common: &CommonArgs) {
    if let Some(reference) = &common.reference {
        config.reference = path_to_string(reference);
    }
}

/// Apply `audit` flags on top of the config and validate the result.
pub fn apply_audit_args(mut config: Config, args: &AuditArgs) -> Result<Config> {
    apply_common(&mut config, &args.common);
    if let Some(translated) = &args.translated {
        config.translated = path_to_string(translated);
    }
    if let Some(json_out) = &args.json_out {
        config.audit_json = path_to_string(json_out);
    }
    if let Some(markdown_out) = &args.markdown_out {
        config.audit_markdown = path_to_string(markdown_out);
    }
    if let Some(threshold) = args.ascii_threshold {
        config.ascii_threshold = threshold;
    }
    if let Some(limit) = args.report_limit {
        config.report_limit = limit;
    }
    config.strict |= args.strict;
    config.ignore_case |= args.ignore_case;
    config.validate()?;
    Ok(config)
}

/// Apply `missing` flags on top of the config and validate the result.
pub fn apply_missing_args(mut config: Config, args: &MissingArgs) -> Result<Config> {
    apply_common(&mut config, &args.common);
    if let Some(audit) = &args.audit {
        config.audit_json = path_to_string(audit);
    }
    if let Some(out) = &args.out {
        config.missing_values = path_to_string(out);
    }
    if let Some(snippet_out) = &args.snippet_out {
        config.missing_snippet = Some(path_to_string(snippet_out));
    }
    config.validate()?;
    Ok(config)
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Turn a configured file name into a path.
pub fn config_path(value: &str) -> PathBuf {
    PathBuf::from(value)
}
