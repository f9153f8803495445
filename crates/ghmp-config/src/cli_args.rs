use std::path::PathBuf;

use ghmp_utils::types::HookType;

/// CLI arguments that feed configuration resolution.
///
/// `None` and empty lists mean "not given on the command line". List entries
/// extend what the config file declares rather than replacing it.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub skip: Option<bool>,
    pub truncate_base_scripts: Option<bool>,
    pub debug: Option<bool>,
    pub hook_content: Vec<(HookType, String)>,
    pub maven_prefix: Vec<HookType>,
    pub env_to_propagate: Vec<(HookType, String)>,
    pub properties_to_propagate: Vec<(HookType, String)>,
    /// `-D key=value` definitions
    pub properties: Vec<(String, String)>,
}
