use std::process::Stdio;

use tracing::debug;

use crate::error::{LAUNCH_FAILURE_EXIT_CODE, RunnerError};

use super::CommandSpec;

// ============================================================================
// CommandRunner Trait - Existence/Runnability Probe
// ============================================================================

/// Runs a command to completion and reports whether it succeeded.
///
/// Used as a probe: callers only care that the executable exists and exits
/// with status 0. Implementations MUST use argv-style APIs only.
///
/// # Returns
///
/// * `Ok(stdout)` - the process exited with code 0
/// * `Err(RunnerError::CommandRunFailure)` - non-zero exit, termination by
///   signal, or failure to launch (exit code [`LAUNCH_FAILURE_EXIT_CODE`])
///
/// # Threading
///
/// Synchronous and blocking. There is no timeout: a probed executable that
/// hangs blocks the caller.
pub trait CommandRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<String, RunnerError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, cmd: &CommandSpec) -> Result<String, RunnerError> {
        (**self).run(cmd)
    }
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCommandRunner;

impl NativeCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for NativeCommandRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<String, RunnerError> {
        let command = cmd.display();
        debug!(command = %command, "Running command");

        let output = cmd
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RunnerError::CommandRunFailure {
                command: command.clone(),
                exit_code: LAUNCH_FAILURE_EXIT_CODE,
                output: format!("Failed to launch: {e}"),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let exit_code = output.status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(command = %command, exit_code, "Command failed");
        Err(RunnerError::CommandRunFailure {
            command,
            exit_code,
            output: format!("{stdout}{stderr}"),
        })
    }
}
