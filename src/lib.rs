//! ghmp - git hook installer for Maven projects
//!
//! ghmp writes one plugin script per git hook type into the repository's
//! hooks directory and wires the hook's base script to call it. Base scripts
//! keep any content the user or other tools put there; re-running an install
//! never duplicates the call line.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Run `mvn -f pom.xml validate` before every commit
//! ghmp install --pre-commit validate --maven-prefix pre-commit
//!
//! # See what would be written without touching the repository
//! ghmp install --pre-push "verify" --dry-run
//!
//! # Print the effective configuration and where each value came from
//! ghmp config
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust,no_run
//! use ghmp::{
//!     CliArgs, Config, HookContentGenerator, HookInstaller, NativeCommandRunner,
//!     ProcessEnvironment, ProjectDescriptor, hooks_directory,
//! };
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project_dir = Path::new(".");
//! let config = Config::discover_from(project_dir, &CliArgs::default(), &ProcessEnvironment)?;
//! let descriptor = ProjectDescriptor::load(project_dir, None, None)?;
//! let hooks_dir = hooks_directory(project_dir)?;
//!
//! let runner = NativeCommandRunner;
//! let generator = HookContentGenerator::new(
//!     &config.hooks,
//!     &ProcessEnvironment,
//!     &config.properties,
//!     &runner,
//!     &descriptor.path,
//! );
//! let report = HookInstaller::new(&hooks_dir, &descriptor.artifact_id, config.install, &generator)
//!     .install()?;
//! println!("installed {} hooks", report.installed.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Stable Public API
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Config`], [`CliArgs`] | Configuration discovery and precedence |
//! | [`ProjectDescriptor`] | Descriptor path and artifact id |
//! | [`HookContentGenerator`] | Renders plugin scripts |
//! | [`HookInstaller`], [`InstallReport`] | Writes scripts and reports the result |
//! | [`GhmpError`], [`ExitCode`] | Errors and their CLI exit codes |
//!
//! Everything under `cli` is internal to the binary.

pub mod cli;

pub use ghmp_config::{CliArgs, Config, HookSettings, HooksConfig, InstallOptions};
pub use ghmp_engine::{
    HookContentGenerator, HookInstaller, InstallReport, InstalledHook, SCRIPT_HEADER,
    command_call_line, plugin_script_name,
};
pub use ghmp_maven::{MavenEnvironment, ProjectDescriptor, ToolExecutable};
pub use ghmp_repo::{HOOKS_DIR, hooks_directory, locate};
pub use ghmp_runner::{CommandRunner, CommandSpec, NativeCommandRunner};
pub use ghmp_script::{ExecutableScript, ScriptRegistry};
pub use ghmp_utils::error::{
    ConfigError, GhmpError, RepositoryError, ScriptError, ToolError, UserFriendlyError,
};
pub use ghmp_utils::exit_codes::ExitCode;
pub use ghmp_utils::lookup::{Lookup, ProcessEnvironment};
pub use ghmp_utils::types::{ConfigSource, HookType};
