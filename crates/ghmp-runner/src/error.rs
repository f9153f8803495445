//! Error types for runner module

use thiserror::Error;

/// Exit code reported when the process could not be launched at all
/// (executable missing, permission denied) or was terminated by a signal.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Process execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    #[error("Command '{command}' failed with exit code {exit_code}")]
    CommandRunFailure {
        command: String,
        exit_code: i32,
        output: String,
    },
}

impl RunnerError {
    /// Exit code of the failed command, or [`LAUNCH_FAILURE_EXIT_CODE`].
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandRunFailure { exit_code, .. } => *exit_code,
        }
    }

    /// Whether the command never started.
    #[must_use]
    pub fn is_launch_failure(&self) -> bool {
        self.exit_code() == LAUNCH_FAILURE_EXIT_CODE
    }
}
