use std::collections::BTreeMap;

use ghmp_utils::types::{ConfigSource, HookType};

use crate::Config;
use crate::model::{hook_key, property_key};

fn source_label(source: Option<&ConfigSource>) -> String {
    source.copied().unwrap_or(ConfigSource::Default).to_string()
}

impl Config {
    /// Get effective configuration as key-value pairs with source attribution
    ///
    /// Keys are sorted; list values are joined with `", "`.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: String, value: String| {
            let source = source_label(self.source_attribution.get(&key));
            config.insert(key, (value, source));
        };

        add_config("install.skip".to_string(), self.install.skip.to_string());
        add_config(
            "install.truncate_base_scripts".to_string(),
            self.install.truncate_base_scripts.to_string(),
        );
        add_config("install.debug".to_string(), self.install.debug.to_string());

        for hook in HookType::all() {
            let settings = self.hooks.settings(hook);
            add_config(hook_key(hook, "content"), settings.content.clone());
            add_config(
                hook_key(hook, "maven_prefix"),
                settings.maven_prefix.to_string(),
            );
            add_config(
                hook_key(hook, "env_to_propagate"),
                settings.env_to_propagate.join(", "),
            );
            add_config(
                hook_key(hook, "properties_to_propagate"),
                settings.properties_to_propagate.join(", "),
            );
        }

        for (name, value) in &self.properties {
            add_config(property_key(name), value.clone());
        }

        config
    }
}
