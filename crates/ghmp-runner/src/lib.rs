//! Process execution for probing external executables.
//!
//! All process execution goes through [`CommandSpec`] to ensure argv-style
//! invocation: arguments cross the process boundary as discrete elements and
//! are never evaluated by a shell.

pub mod command_spec;
pub mod error;
pub mod process;

pub use command_spec::CommandSpec;
pub use error::{LAUNCH_FAILURE_EXIT_CODE, RunnerError};
pub use process::{CommandRunner, NativeCommandRunner};
