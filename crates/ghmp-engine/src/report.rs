use serde::Serialize;

use ghmp_utils::types::HookType;

/// Outcome of one installation run, printed by `ghmp install --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub artifact_id: String,
    pub hooks_directory: String,
    /// Nothing was written; scripts show what would have been
    pub dry_run: bool,
    pub truncated_base_scripts: bool,
    pub installed: Vec<InstalledHook>,
    /// Hook types left alone because their content is blank
    pub skipped: Vec<HookType>,
}

/// One hook type that was (or would be) installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledHook {
    pub hook: HookType,
    pub plugin_script: String,
    pub base_script: String,
    pub command_call: String,
    pub content: String,
}
