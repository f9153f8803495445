//! Show command implementation
//!
//! Handles `ghmp show <hook>`: prints the plugin script one hook would get.

use anyhow::Result;
use tracing::warn;

use super::common::ProjectContext;

use crate::{
    Config, GhmpError, HookContentGenerator, HookType, NativeCommandRunner, ProcessEnvironment,
};

/// Execute the show command
pub fn execute_show_command(context: &ProjectContext, hook: HookType, config: &Config) -> Result<()> {
    let descriptor = context.descriptor_path();

    let env = ProcessEnvironment;
    let runner = NativeCommandRunner::new();
    let generator =
        HookContentGenerator::new(&config.hooks, &env, &config.properties, &runner, &descriptor)
            .debug(config.install.debug);

    if !generator.settings(hook).is_enabled() {
        warn!(hook = %hook, "No content configured; install would leave this hook untouched");
    }

    print!("{}", generator.generate(hook).map_err(GhmpError::from)?);
    Ok(())
}
