//! Command-line interface for ghmp
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions and parsing structures (clap)
//! - `run`: Main entry point and command dispatch
//! - `commands`: Command implementations
//! - `tests`: Test module (cfg(test) only)

pub mod args;
mod commands;
mod run;


// Re-export argument types
pub use args::{Cli, Commands, HookArgs, InstallArgs, build_cli};

// Re-export run function
pub use run::run;
