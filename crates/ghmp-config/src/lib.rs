//! Configuration management for ghmp
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > environment > file > defaults. Supports TOML configuration files
//! with `[install]`, `[hooks.<hook>]` and `[properties]` tables.

mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use cli_args::CliArgs;
pub use discovery::{CONFIG_DIR, CONFIG_FILE, MAVEN_HOME_ENV, SKIP_ENV};
pub use ghmp_utils::types::{ConfigSource, MAVEN_HOME_PROPERTY};
pub use model::{Config, HookSettings, HooksConfig, InstallOptions};
pub use validation::{validate_env_name, validate_name};
