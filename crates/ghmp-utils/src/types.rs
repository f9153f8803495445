//! Shared domain types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Property naming the Maven installation root
pub const MAVEN_HOME_PROPERTY: &str = "maven.home";

/// The git hook types managed by ghmp.
///
/// The string form is the git hook name, which is also the base script's
/// file name inside the hooks directory.
///
/// ```rust
/// use ghmp_utils::types::HookType;
/// use std::str::FromStr;
///
/// assert_eq!(HookType::PrePush.to_string(), "pre-push");
/// assert_eq!(HookType::from_str("post-commit").unwrap(), HookType::PostCommit);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HookType {
    PreCommit,
    PrePush,
    PostCommit,
}

impl HookType {
    /// All hook types in installation order.
    pub fn all() -> impl Iterator<Item = HookType> {
        HookType::iter()
    }

    /// Git hook name, e.g. `pre-commit`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HookType::PreCommit => "pre-commit",
            HookType::PrePush => "pre-push",
            HookType::PostCommit => "post-commit",
        }
    }

    /// File name of the base script git invokes for this hook.
    #[must_use]
    pub fn base_script_name(self) -> &'static str {
        self.name()
    }

    /// Suffix of the per-project plugin script, appended to the artifact id:
    /// `<artifactId>.git-hook.<name>.sh`.
    #[must_use]
    pub fn plugin_script_suffix(self) -> String {
        format!("git-hook.{}.sh", self.name())
    }
}

/// Where an effective configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConfigSource {
    Cli,
    Env,
    Config,
    Default,
}
