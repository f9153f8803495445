//! Hook script files.
//!
//! [`ExecutableScript`] edits one script in place; [`ScriptRegistry`] is the
//! get-or-create entry point used by the installer.

mod registry;
mod script;

pub use registry::ScriptRegistry;
pub use script::ExecutableScript;
