//! Config command implementation
//!
//! Handles `ghmp config`: the effective configuration with the source of
//! each value (`cli`, `env`, `config`, `default`).

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use super::json_emit::emit_json;

use crate::Config;

#[derive(Serialize)]
struct ConfigValue {
    value: String,
    source: String,
}

#[derive(Serialize)]
struct ConfigOutput {
    config_path: Option<String>,
    values: BTreeMap<String, ConfigValue>,
}

/// Execute the config command
pub fn execute_config_command(json: bool, config: &Config) -> Result<()> {
    let effective = config.effective_config();
    let config_path = config
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());

    if json {
        let output = ConfigOutput {
            config_path,
            values: effective
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigValue { value, source }))
                .collect(),
        };
        println!("{}", emit_json(&output, "config")?);
        return Ok(());
    }

    println!(
        "Config file: {}",
        config_path.as_deref().unwrap_or("(none, using defaults)")
    );
    let width = effective.keys().map(String::len).max().unwrap_or(0);
    for (key, (value, source)) in &effective {
        println!("  {key:<width$} = {value:?}  [{source}]");
    }

    Ok(())
}
