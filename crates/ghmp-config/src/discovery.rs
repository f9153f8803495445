use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

use ghmp_utils::error::{ConfigError, GhmpError};
use ghmp_utils::lookup::Lookup;
use ghmp_utils::types::{ConfigSource, HookType, MAVEN_HOME_PROPERTY};

use crate::model::{hook_key, property_key};
use crate::{CliArgs, Config, HookSettings, HooksConfig, InstallOptions};

/// Directory holding the project configuration file
pub const CONFIG_DIR: &str = ".ghmp";
/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";
/// Environment variable seeding [`MAVEN_HOME_PROPERTY`]
pub const MAVEN_HOME_ENV: &str = "MAVEN_HOME";
/// Environment variable that skips installation when truthy
pub const SKIP_ENV: &str = "GHMP_SKIP";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    install: Option<TomlInstall>,
    hooks: Option<TomlHooks>,
    properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlInstall {
    skip: Option<bool>,
    truncate_base_scripts: Option<bool>,
    debug: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlHooks {
    #[serde(rename = "pre-commit")]
    pre_commit: Option<TomlHookSettings>,
    #[serde(rename = "pre-push")]
    pre_push: Option<TomlHookSettings>,
    #[serde(rename = "post-commit")]
    post_commit: Option<TomlHookSettings>,
}

impl TomlHooks {
    fn take(&mut self, hook: HookType) -> Option<TomlHookSettings> {
        match hook {
            HookType::PreCommit => self.pre_commit.take(),
            HookType::PrePush => self.pre_push.take(),
            HookType::PostCommit => self.post_commit.take(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlHookSettings {
    content: Option<String>,
    maven_prefix: Option<bool>,
    env_to_propagate: Option<Vec<String>>,
    properties_to_propagate: Option<Vec<String>>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > env > file > defaults
    ///
    /// `start_dir` is the project directory; the config file is searched
    /// upward from there unless `cli_args.config_path` names one explicitly.
    pub fn discover_from(
        start_dir: &Path,
        cli_args: &CliArgs,
        env: &dyn Lookup,
    ) -> Result<Self, GhmpError> {
        let mut source_attribution = HashMap::new();
        let mut install = InstallOptions::default();
        let mut hooks = HooksConfig::default();
        let mut properties = BTreeMap::new();

        for key in ["install.skip", "install.truncate_base_scripts", "install.debug"] {
            source_attribution.insert(key.to_string(), ConfigSource::Default);
        }
        for hook in HookType::all() {
            for field in [
                "content",
                "maven_prefix",
                "env_to_propagate",
                "properties_to_propagate",
            ] {
                source_attribution.insert(hook_key(hook, field), ConfigSource::Default);
            }
        }

        let config_path = match &cli_args.config_path {
            Some(explicit_path) => {
                if !explicit_path.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit_path.display().to_string(),
                    }
                    .into());
                }
                Some(explicit_path.clone())
            }
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "Loading configuration file");
            let file_config = Self::load_config_file(path)?;
            let source = ConfigSource::Config;

            if let Some(file_install) = file_config.install {
                if let Some(skip) = file_install.skip {
                    install.skip = skip;
                    source_attribution.insert("install.skip".to_string(), source);
                }
                if let Some(truncate) = file_install.truncate_base_scripts {
                    install.truncate_base_scripts = truncate;
                    source_attribution.insert("install.truncate_base_scripts".to_string(), source);
                }
                if let Some(debug) = file_install.debug {
                    install.debug = debug;
                    source_attribution.insert("install.debug".to_string(), source);
                }
            }

            if let Some(mut file_hooks) = file_config.hooks {
                for hook in HookType::all() {
                    if let Some(file_settings) = file_hooks.take(hook) {
                        apply_file_hook_settings(
                            hook,
                            file_settings,
                            hooks.settings_mut(hook),
                            &mut source_attribution,
                        );
                    }
                }
            }

            if let Some(file_properties) = file_config.properties {
                for (name, value) in file_properties {
                    source_attribution.insert(property_key(&name), source);
                    properties.insert(name, value);
                }
            }
        }

        // Environment
        if let Some(raw) = env.lookup(SKIP_ENV) {
            install.skip = parse_flag(SKIP_ENV, &raw)?;
            source_attribution.insert("install.skip".to_string(), ConfigSource::Env);
        }
        if !properties.contains_key(MAVEN_HOME_PROPERTY)
            && let Some(maven_home) = env.lookup(MAVEN_HOME_ENV).filter(|v| !v.trim().is_empty())
        {
            properties.insert(MAVEN_HOME_PROPERTY.to_string(), maven_home);
            source_attribution.insert(property_key(MAVEN_HOME_PROPERTY), ConfigSource::Env);
        }

        // CLI
        let cli = ConfigSource::Cli;
        if let Some(skip) = cli_args.skip {
            install.skip = skip;
            source_attribution.insert("install.skip".to_string(), cli);
        }
        if let Some(truncate) = cli_args.truncate_base_scripts {
            install.truncate_base_scripts = truncate;
            source_attribution.insert("install.truncate_base_scripts".to_string(), cli);
        }
        if let Some(debug) = cli_args.debug {
            install.debug = debug;
            source_attribution.insert("install.debug".to_string(), cli);
        }
        for (hook, content) in &cli_args.hook_content {
            hooks.settings_mut(*hook).content = content.clone();
            source_attribution.insert(hook_key(*hook, "content"), cli);
        }
        for hook in &cli_args.maven_prefix {
            hooks.settings_mut(*hook).maven_prefix = true;
            source_attribution.insert(hook_key(*hook, "maven_prefix"), cli);
        }
        for (hook, name) in &cli_args.env_to_propagate {
            push_unique(&mut hooks.settings_mut(*hook).env_to_propagate, name);
            source_attribution.insert(hook_key(*hook, "env_to_propagate"), cli);
        }
        for (hook, name) in &cli_args.properties_to_propagate {
            push_unique(&mut hooks.settings_mut(*hook).properties_to_propagate, name);
            source_attribution.insert(hook_key(*hook, "properties_to_propagate"), cli);
        }
        for (name, value) in &cli_args.properties {
            properties.insert(name.clone(), value.clone());
            source_attribution.insert(property_key(name), cli);
        }

        let config = Config {
            install,
            hooks,
            properties,
            config_path,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }

    /// Search for `.ghmp/config.toml` upward from `start_dir`.
    ///
    /// The search stops at the first directory containing a `.git` entry or
    /// at the filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = Some(start_dir);

        while let Some(dir) = current_dir {
            let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if dir.join(".git").exists() {
                break;
            }

            current_dir = dir.parent();
        }

        None
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::InvalidFile(format!("Failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {e}", path.display())))
    }
}

fn apply_file_hook_settings(
    hook: HookType,
    file_settings: TomlHookSettings,
    settings: &mut HookSettings,
    source_attribution: &mut HashMap<String, ConfigSource>,
) {
    let source = ConfigSource::Config;

    if let Some(content) = file_settings.content {
        settings.content = content;
        source_attribution.insert(hook_key(hook, "content"), source);
    }
    if let Some(maven_prefix) = file_settings.maven_prefix {
        settings.maven_prefix = maven_prefix;
        source_attribution.insert(hook_key(hook, "maven_prefix"), source);
    }
    if let Some(names) = file_settings.env_to_propagate {
        settings.env_to_propagate = names;
        source_attribution.insert(hook_key(hook, "env_to_propagate"), source);
    }
    if let Some(names) = file_settings.properties_to_propagate {
        settings.properties_to_propagate = names;
        source_attribution.insert(hook_key(hook, "properties_to_propagate"), source);
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
}

/// Parse a boolean switch from the environment.
fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: format!("expected true/false or 1/0, got '{raw}'"),
        }),
    }
}
