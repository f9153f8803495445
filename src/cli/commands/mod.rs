//! CLI command implementations
//!
//! This module contains all the `execute_*` command handlers.
//! Each command function handles its specific CLI subcommand.

mod common;
mod config;
mod install;
mod json_emit;
mod locate;
mod show;

pub use common::ProjectContext;
pub use config::execute_config_command;
pub use install::execute_install_command;
pub use locate::execute_locate_command;
pub use show::execute_show_command;
