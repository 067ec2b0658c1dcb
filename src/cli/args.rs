//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `audit`: Compare a translated locale file against the reference
//! - `missing`: Look up the reference values of an audit's missing keys
//! - `init`: Initialize a transaudit configuration file
//!
//! Every path flag overrides the matching `.transauditrc.json` field, which
//! in turn overrides the built-in default.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Audit(cmd)) => cmd.args.common.verbose,
            Some(Command::Missing(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Reference locale file (overrides config file)
    #[arg(long, env = "TRANSAUDIT_REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct AuditArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translated locale file (overrides config file)
    #[arg(long, env = "TRANSAUDIT_TRANSLATED")]
    pub translated: Option<PathBuf>,

    /// Output path of the complete JSON report
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Output path of the Markdown report
    #[arg(long)]
    pub markdown_out: Option<PathBuf>,

    /// Ratio of ASCII characters above which a value is reported
    #[arg(long)]
    pub ascii_threshold: Option<f64>,

    /// Entries per list in the Markdown report
    #[arg(long)]
    pub report_limit: Option<usize>,

    /// Exit with status 1 when missing keys or placeholder mismatches are found
    #[arg(long)]
    pub strict: bool,

    /// Compare key paths case-insensitively for missing and extra keys
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub args: AuditArgs,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct MissingArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Audit report to read missing keys from (overrides config file)
    #[arg(long)]
    pub audit: Option<PathBuf>,

    /// Output path of the missing value lookup table
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also write the resolved values as `"key": value,` lines to paste
    /// into the translated file
    #[arg(long)]
    pub snippet_out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    #[command(flatten)]
    pub args: MissingArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit a translated locale file (missing keys, placeholders, untranslated values)
    Audit(AuditCommand),
    /// Look up reference values for the missing keys of the last audit
    Missing(MissingCommand),
    /// Initialize a new .transauditrc.json configuration file
    Init,
}
