use anyhow::Result;
use tracing::debug;

use super::{
    AuditOutcome, CommandResult, CommandSummary,
    helper::{apply_audit_args, config_path, load_project_config},
};
use crate::{
    cli::args::AuditCommand,
    config::Config,
    core::AuditContext,
    report::{write_audit_json, write_audit_markdown},
    rules::run_audit,
};

pub fn audit(cmd: AuditCommand) -> Result<CommandResult> {
    let config = apply_audit_args(load_project_config()?, &cmd.args)?;
    audit_with_config(&config)
}

/// Run the audit pipeline with fully resolved settings.
///
/// Both locale files are loaded before anything is written, so a load
/// failure leaves earlier reports untouched.
pub fn audit_with_config(config: &Config) -> Result<CommandResult> {
    let reference_path = config_path(&config.reference);
    let translated_path = config_path(&config.translated);
    let json_path = config_path(&config.audit_json);
    let markdown_path = config_path(&config.audit_markdown);

    let ctx = AuditContext::load(&reference_path, &translated_path)?;
    let report = run_audit(&ctx, &config.audit_options());
    debug!("Audit summary: {:?}", report.summary);

    let locale = ctx.translated.locale.clone();
    write_audit_json(&report, &json_path)?;
    write_audit_markdown(&report, &markdown_path, &locale, config.report_limit)?;

    let error_count = report.summary.error_count();
    Ok(CommandResult::new(
        CommandSummary::Audit(AuditOutcome {
            summary: report.summary,
            locale,
            json_path,
            markdown_path,
        }),
        error_count,
        config.strict,
    ))
}
