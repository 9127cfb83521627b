//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

use std::process::ExitCode;

pub mod prompt;
pub mod simulate;
pub mod submit;

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The submitted input failed validation
    InvalidInput,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::InvalidInput => ExitCode::from(2),
        }
    }
}
