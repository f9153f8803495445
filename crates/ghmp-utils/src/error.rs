use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Library-level error type with rich context and user-friendly reporting.
///
/// `GhmpError` is the error returned by installation runs. It provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes for consistent error reporting
///
/// # Error Categories
///
/// | Category | Description |
/// |----------|-------------|
/// | `Config` | Configuration file, CLI argument or project descriptor errors |
/// | `Repository` | Metadata directory missing or unreadable |
/// | `Script` | Hook script could not be read or written |
/// | `Tool` | No usable build tool executable |
/// | `Serialization` | JSON output could not be produced |
///
/// # Propagation
///
/// Every variant aborts the run. Files written earlier in the same run stay
/// on disk; there is no rollback. Failed launcher probes never surface here;
/// tool resolution absorbs them and reports `Tool` when no candidate runs.
///
/// # Example
///
/// ```rust
/// use ghmp_utils::error::{GhmpError, RepositoryError};
/// use ghmp_utils::exit_codes::ExitCode;
///
/// let err = GhmpError::from(RepositoryError::NotFound {
///     start: "/tmp/project".into(),
/// });
/// assert_eq!(err.to_exit_code(), ExitCode::REPOSITORY);
/// assert!(err.display_for_user().contains("Suggestions:"));
/// ```
#[derive(Error, Debug)]
pub enum GhmpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Build tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Repository,
    FileSystem,
    Process,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Repository => write!(f, "Repository"),
            Self::FileSystem => write!(f, "File System"),
            Self::Process => write!(f, "Process"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Project descriptor not readable at {path}: {reason}")]
    DescriptorUnreadable { path: String, reason: String },

    #[error("No artifactId found in project descriptor {path}")]
    MissingArtifactId { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DescriptorUnreadable { path, reason } => {
                format!("Could not read project descriptor {path}: {reason}")
            }
            Self::MissingArtifactId { path } => {
                format!("Project descriptor {path} does not declare an artifactId")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with optional [install], [hooks.<hook>] and [properties] tables."
                    .to_string(),
            ),
            Self::InvalidValue { .. } => Some(
                "Property and environment variable names are emitted into shell scripts and must be plain identifiers."
                    .to_string(),
            ),
            Self::NotFound { .. } => Some(
                "ghmp searches for .ghmp/config.toml from the project directory upward to the repository root."
                    .to_string(),
            ),
            Self::DescriptorUnreadable { .. } | Self::MissingArtifactId { .. } => Some(
                "The artifactId names the generated hook scripts; the descriptor path is passed to mvn with -f."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Hook tables are named pre-commit, pre-push and post-commit".to_string(),
            ],
            Self::InvalidValue { key, .. } => vec![
                format!("Fix or remove the value of '{key}'"),
                "Names must not be empty and must not contain whitespace or '='".to_string(),
                "Environment variable names must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
            ],
            Self::NotFound { .. } => vec![
                "Check the path given to --config".to_string(),
                "Omit --config to use discovery and defaults".to_string(),
            ],
            Self::DescriptorUnreadable { .. } => vec![
                "Run ghmp from the project directory or pass --project-dir".to_string(),
                "Point --pom at the project descriptor".to_string(),
            ],
            Self::MissingArtifactId { .. } => vec![
                "Pass --artifact-id explicitly".to_string(),
                "Declare <artifactId> in the project descriptor".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

// ============================================================================
// Repository errors
// ============================================================================

/// Errors locating the version-control metadata directory
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Could not find .git directory from {}", start.display())]
    NotFound { start: PathBuf },

    #[error("Failed to read .git file {}: {source}", path.display())]
    MetadataReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create hooks directory {}: {source}", path.display())]
    HooksDirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
}

impl UserFriendlyError for RepositoryError {
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { start } => {
                format!("No git repository found at or above {}", start.display())
            }
            Self::MetadataReadFailure { path, source } => {
                format!("Could not read worktree file {}: {source}", path.display())
            }
            Self::HooksDirectoryCreate { path, source } => {
                format!("Could not create hooks directory {}: {source}", path.display())
            }
            Self::NonUtf8Path { path } => {
                format!("Repository path is not valid UTF-8: {}", path.display())
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::NotFound { .. } => Some(
                "Hooks are installed into the .git directory of the repository containing the project."
                    .to_string(),
            ),
            Self::MetadataReadFailure { .. } => Some(
                "In a worktree, .git is a file whose 'gitdir:' line points at the real metadata directory."
                    .to_string(),
            ),
            Self::HooksDirectoryCreate { .. } | Self::NonUtf8Path { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { .. } => vec![
                "Run 'git init' in the project root".to_string(),
                "Check --project-dir points inside a git repository".to_string(),
            ],
            Self::MetadataReadFailure { .. } => vec![
                "Check read permissions on the .git file".to_string(),
                "Run 'git worktree repair' if the worktree was moved".to_string(),
            ],
            Self::HooksDirectoryCreate { .. } => vec![
                "Check write permissions on the .git directory".to_string(),
            ],
            Self::NonUtf8Path { .. } => vec![
                "Move the repository to a path with UTF-8 characters only".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Repository
    }
}

// ============================================================================
// Script errors
// ============================================================================

/// Errors reading or writing a hook script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to write script {path}: {reason}")]
    WriteFailure { path: String, reason: String },
}

impl UserFriendlyError for ScriptError {
    fn user_message(&self) -> String {
        match self {
            Self::WriteFailure { path, reason } => {
                format!("Could not update hook script {path}: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        Some(
            "The run was aborted; hook scripts written before this failure are left in place."
                .to_string(),
        )
    }

    fn suggestions(&self) -> Vec<String> {
        vec![
            "Check write permissions on the .git/hooks directory".to_string(),
            "Ensure sufficient disk space is available".to_string(),
        ]
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::FileSystem
    }
}

// ============================================================================
// Build tool errors
// ============================================================================

/// Errors resolving the build tool executable
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("No runnable {executable} found (tried: {})", candidates.join(", "))]
    ExecutableNotFound {
        executable: String,
        candidates: Vec<String>,
    },
}

impl UserFriendlyError for ToolError {
    fn user_message(&self) -> String {
        match self {
            Self::ExecutableNotFound {
                executable,
                candidates,
            } => format!(
                "Could not find a runnable '{executable}' (tried {})",
                candidates.join(", ")
            ),
        }
    }

    fn context(&self) -> Option<String> {
        Some(
            "Hooks with maven_prefix enabled embed the Maven launcher; installing a hook that cannot run would break commits."
                .to_string(),
        )
    }

    fn suggestions(&self) -> Vec<String> {
        vec![
            "Set the maven.home property (-Dmaven.home=...) or the MAVEN_HOME variable".to_string(),
            "Add the Maven bin directory to PATH".to_string(),
            "Disable maven_prefix for hooks that run plain commands".to_string(),
        ]
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Process
    }
}

// ============================================================================
// GhmpError
// ============================================================================

impl UserFriendlyError for GhmpError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Repository(err) => err.user_message(),
            Self::Script(err) => err.user_message(),
            Self::Tool(err) => err.user_message(),
            Self::Serialization(err) => format!("Failed to serialize output: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Repository(err) => err.context(),
            Self::Script(err) => err.context(),
            Self::Tool(err) => err.context(),
            Self::Serialization(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Repository(err) => err.suggestions(),
            Self::Script(err) => err.suggestions(),
            Self::Tool(err) => err.suggestions(),
            Self::Serialization(_) => vec!["Report this as a bug".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Repository(err) => err.category(),
            Self::Script(err) => err.category(),
            Self::Tool(err) => err.category(),
            Self::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

impl GhmpError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}
