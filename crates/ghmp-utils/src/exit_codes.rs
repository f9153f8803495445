//! Exit code constants and error mapping for ghmp.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments, configuration or project descriptor |
//! | 3 | `REPOSITORY` | No git metadata directory, or it could not be read |
//! | 4 | `SCRIPT_WRITE` | A hook script could not be written |
//! | 5 | `TOOL_NOT_FOUND` | No runnable Maven executable |

use crate::error::GhmpError;

/// Exit codes matching the documented exit code table.
///
/// # Example
///
/// ```rust
/// use ghmp_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::TOOL_NOT_FOUND, ExitCode::from_i32(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments, configuration or descriptor
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Repository error - metadata directory missing or unreadable
    pub const REPOSITORY: ExitCode = ExitCode(3);

    /// Script write failure - a hook file could not be updated
    pub const SCRIPT_WRITE: ExitCode = ExitCode(4);

    /// Build tool not found - every executable candidate failed its probe
    pub const TOOL_NOT_FOUND: ExitCode = ExitCode(5);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl GhmpError {
    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Repository(_) => ExitCode::REPOSITORY,
            Self::Script(_) => ExitCode::SCRIPT_WRITE,
            Self::Tool(_) => ExitCode::TOOL_NOT_FOUND,
            Self::Serialization(_) => ExitCode::INTERNAL,
        }
    }
}
