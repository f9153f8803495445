//! Hook installation engine.
//!
//! [`HookContentGenerator`] renders plugin scripts; [`HookInstaller`] writes
//! them into the hooks directory and wires each base script to call its
//! plugin script.

mod generator;
mod installer;
mod report;

pub use generator::{HookContentGenerator, SCRIPT_HEADER};
pub use installer::{HookInstaller, command_call_line, plugin_script_name};
pub use report::{InstallReport, InstalledHook};
