use std::path::Path;

use ghmp_config::{HookSettings, HooksConfig};
use ghmp_maven::MavenEnvironment;
use ghmp_runner::CommandRunner;
use ghmp_utils::error::ToolError;
use ghmp_utils::lookup::Lookup;
use ghmp_utils::paths::shell_quoted_path;
use ghmp_utils::types::HookType;

/// First lines of every generated script
pub const SCRIPT_HEADER: &str = "#!/bin/bash\nset -e\n\n";

/// Builds the body of a plugin hook script.
///
/// Layout:
///
/// ```text
/// #!/bin/bash
/// set -e
///
/// export NAME="value"      (one per propagated variable with a value)
///
/// <command line>           (absent when the content is blank)
/// ```
///
/// With the Maven prefix the command line is
/// `<mvn> -f "<descriptor>" [-Dname=value ...] <content>`.
pub struct HookContentGenerator<'a> {
    hooks: &'a HooksConfig,
    env: &'a dyn Lookup,
    properties: &'a dyn Lookup,
    maven: MavenEnvironment<'a>,
    descriptor: &'a Path,
    debug: bool,
}

impl<'a> HookContentGenerator<'a> {
    #[must_use]
    pub fn new(
        hooks: &'a HooksConfig,
        env: &'a dyn Lookup,
        properties: &'a dyn Lookup,
        runner: &'a dyn CommandRunner,
        descriptor: &'a Path,
    ) -> Self {
        let mut maven = MavenEnvironment::new(properties, runner);
        if let Some(dir) = descriptor.parent().filter(|dir| dir.is_dir()) {
            maven = maven.working_dir(dir);
        }

        Self {
            hooks,
            env,
            properties,
            maven,
            descriptor,
            debug: false,
        }
    }

    /// Use the `mvnDebug` launcher.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn settings(&self, hook: HookType) -> &HookSettings {
        self.hooks.settings(hook)
    }

    /// Generate the script for `hook`.
    ///
    /// # Errors
    ///
    /// [`ToolError`] when the Maven prefix is enabled and no launcher passes
    /// its probe.
    pub fn generate(&self, hook: HookType) -> Result<String, ToolError> {
        let settings = self.hooks.settings(hook);
        let mut script = String::from(SCRIPT_HEADER);

        for name in trimmed_names(&settings.env_to_propagate) {
            if let Some(value) = self.env.lookup(name).filter(|value| !value.is_empty()) {
                script.push_str(&format!("export {name}=\"{value}\"\n"));
            }
        }
        script.push('\n');

        if !settings.is_enabled() {
            return Ok(script);
        }

        if settings.maven_prefix {
            let executable = self.maven.maven_executable(self.debug)?;
            script.push_str(&executable.render());
            script.push_str(" -f ");
            script.push_str(&shell_quoted_path(self.descriptor));

            for name in trimmed_names(&settings.properties_to_propagate) {
                if let Some(value) = self.properties.lookup(name) {
                    script.push_str(&format!(" -D{name}={value}"));
                }
            }

            script.push(' ');
        }

        script.push_str(&settings.content);
        script.push('\n');

        Ok(script)
    }
}

fn trimmed_names(names: &[String]) -> impl Iterator<Item = &str> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
}
