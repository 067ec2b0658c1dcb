use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of a transaudit run.
///
/// - `Success` (0): Reports written; findings are not enforced
/// - `Failure` (1): Enforced findings (`--strict`), or `init` found an existing config
/// - `Error` (2): Fatal error (missing or malformed input, unwritable output)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
