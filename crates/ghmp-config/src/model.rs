use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use ghmp_utils::types::{ConfigSource, HookType};

/// Installation switches from the `[install]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallOptions {
    /// Do nothing at all
    pub skip: bool,
    /// Empty each base script before re-adding the call line
    pub truncate_base_scripts: bool,
    /// Use the `mvnDebug` launcher in generated scripts
    pub debug: bool,
}

/// Settings for one hook type, from `[hooks.<name>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSettings {
    /// Command line or Maven arguments. Blank means the hook is not installed.
    pub content: String,
    /// Run `content` through the Maven launcher
    pub maven_prefix: bool,
    /// Environment variables exported at the top of the script
    pub env_to_propagate: Vec<String>,
    /// Properties passed as `-D` definitions (Maven prefix only)
    pub properties_to_propagate: Vec<String>,
}

impl HookSettings {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Per-hook settings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    #[serde(rename = "pre-commit")]
    pub pre_commit: HookSettings,
    #[serde(rename = "pre-push")]
    pub pre_push: HookSettings,
    #[serde(rename = "post-commit")]
    pub post_commit: HookSettings,
}

impl HooksConfig {
    #[must_use]
    pub fn settings(&self, hook: HookType) -> &HookSettings {
        match hook {
            HookType::PreCommit => &self.pre_commit,
            HookType::PrePush => &self.pre_push,
            HookType::PostCommit => &self.post_commit,
        }
    }

    pub fn settings_mut(&mut self, hook: HookType) -> &mut HookSettings {
        match hook {
            HookType::PreCommit => &mut self.pre_commit,
            HookType::PrePush => &mut self.pre_push,
            HookType::PostCommit => &mut self.post_commit,
        }
    }
}

/// Configuration for ghmp operations.
///
/// `Config` is resolved with precedence CLI > environment > config file >
/// built-in defaults. Every resolved key is recorded in `source_attribution`
/// so `ghmp config` can show where a value came from.
///
/// # Example
///
/// ```toml
/// [install]
/// truncate_base_scripts = true
///
/// [hooks.pre-commit]
/// content = "validate"
/// maven_prefix = true
/// env_to_propagate = ["JAVA_HOME"]
///
/// [properties]
/// "maven.home" = "/opt/maven"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub install: InstallOptions,
    pub hooks: HooksConfig,
    /// Property set consulted for `maven.home` and `-D` propagation
    pub properties: BTreeMap<String, String>,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// Attribution key for a hook setting, e.g. `hooks.pre-push.content`.
pub(crate) fn hook_key(hook: HookType, field: &str) -> String {
    format!("hooks.{}.{field}", hook.name())
}

/// Attribution key for a property, e.g. `properties.maven.home`.
pub(crate) fn property_key(name: &str) -> String {
    format!("properties.{name}")
}
