//! Terminal output for command results.
//!
//! Status lines go to stdout and are stable for scripts; everything
//! decorative (colors, verbose tables, warnings) goes to stderr.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{AuditOutcome, CommandResult, CommandSummary, InitSummary, MissingOutcome};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{AuditSummary, Rule, Severity};
use crate::report::to_ascii_json_line;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err)
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Audit(outcome) => {
            print_audit(outcome, out)?;
            if verbose {
                print_rule_table(&outcome.summary, &outcome.locale, err);
            }
            if result.exit_on_errors && result.error_count > 0 {
                print_strict_failure(result.error_count, err);
            }
        }
        CommandSummary::Missing(outcome) => print_missing(outcome, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
    Ok(())
}

fn print_audit<W: Write>(outcome: &AuditOutcome, writer: &mut W) -> Result<()> {
    let _ = writeln!(writer, "OK");
    let _ = writeln!(writer, "{}", to_ascii_json_line(&outcome.summary)?);
    let _ = writeln!(
        writer,
        "WROTE {} and {}",
        outcome.json_path.display(),
        outcome.markdown_path.display()
    );
    Ok(())
}

/// Per-rule counts, aligned, with severity colors.
fn print_rule_table<W: Write>(summary: &AuditSummary, locale: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} reference leaves, {} {} leaves",
        summary.en_leaf_count, summary.zh_leaf_count, locale
    );

    let names: Vec<String> = Rule::ALL.iter().map(|rule| rule.to_string()).collect();
    let width = names
        .iter()
        .map(|name| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    for (rule, name) in Rule::ALL.iter().zip(&names) {
        let count = summary.count(*rule);
        let padding = width - UnicodeWidthStr::width(name.as_str());
        let count_str = if count == 0 {
            count.to_string().green()
        } else {
            match rule.severity() {
                Severity::Error => count.to_string().bold().red(),
                Severity::Warning => count.to_string().bold().yellow(),
            }
        };
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            name.cyan(),
            " ".repeat(padding),
            count_str
        );
    }
}

fn print_strict_failure<W: Write>(error_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} (missing keys or placeholder mismatches)",
            error_count,
            if error_count == 1 { "error" } else { "errors" }
        )
        .red()
    );
}

fn print_missing<O: Write, E: Write>(outcome: &MissingOutcome, out: &mut O, err: &mut E) {
    let _ = writeln!(
        out,
        "WROTE {} with {} entries",
        outcome.out_path.display(),
        outcome.entry_count
    );
    if let Some((snippet_path, count)) = &outcome.snippet {
        let _ = writeln!(
            out,
            "WROTE {} with {} lines",
            snippet_path.display(),
            count
        );
    }
    if outcome.failed_count > 0 {
        let _ = writeln!(
            err,
            "{} {} key(s) could not be resolved against the reference (see {})",
            "warning:".bold().yellow(),
            outcome.failed_count,
            outcome.out_path.display().to_string().cyan()
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
