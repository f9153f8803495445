use regex::Regex;
use std::sync::LazyLock;

use ghmp_utils::error::{ConfigError, GhmpError};
use ghmp_utils::types::HookType;

use crate::Config;
use crate::model::{hook_key, property_key};

static SHELL_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

impl Config {
    /// Validate configuration values
    ///
    /// Names end up verbatim in generated shell scripts. Environment
    /// variables are exported (`export NAME=...`) and must be shell
    /// identifiers; property names (`-Dname=...`) must be single words.
    pub(crate) fn validate(&self) -> Result<(), GhmpError> {
        for hook in HookType::all() {
            let settings = self.hooks.settings(hook);

            for name in &settings.env_to_propagate {
                validate_env_name(&hook_key(hook, "env_to_propagate"), name)?;
            }
            for name in &settings.properties_to_propagate {
                validate_name(&hook_key(hook, "properties_to_propagate"), name)?;
            }
        }

        for name in self.properties.keys() {
            validate_name(&property_key(name), name)?;
        }

        Ok(())
    }
}

/// Check that a variable or property name is usable in a generated script.
pub fn validate_name(key: &str, name: &str) -> Result<(), ConfigError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: "name must not be empty".to_string(),
        });
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c == '=') {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: format!("'{trimmed}' must not contain whitespace or '='"),
        });
    }

    Ok(())
}

/// Check that an environment variable name can be exported by a shell.
pub fn validate_env_name(key: &str, name: &str) -> Result<(), ConfigError> {
    validate_name(key, name)?;

    let trimmed = name.trim();
    if !SHELL_IDENTIFIER.is_match(trimmed) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: format!("'{trimmed}' is not a shell variable name ([A-Za-z_][A-Za-z0-9_]*)"),
        });
    }

    Ok(())
}
