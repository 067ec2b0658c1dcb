//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with error counts and exit behavior
//! - `Err` if the command fails (e.g., input file not found, parse errors)

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{audit::audit, init::init, missing::missing},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Missing(cmd)) => missing(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
