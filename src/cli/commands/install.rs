//! Install command implementation
//!
//! Handles `ghmp install`, `ghmp install --dry-run` and `ghmp install --json`.

use anyhow::Result;
use camino::Utf8PathBuf;
use serde::Serialize;
use tracing::info;

use super::common::ProjectContext;
use super::json_emit::emit_json;

use crate::{
    Config, GhmpError, HOOKS_DIR, HookContentGenerator, HookInstaller, InstallReport,
    NativeCommandRunner, ProcessEnvironment, hooks_directory, locate,
};

/// `--json` output when installation is skipped
#[derive(Serialize)]
struct SkippedOutput {
    skipped: bool,
}

/// Execute the install command
pub fn execute_install_command(
    context: &ProjectContext,
    dry_run: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    if config.install.skip {
        info!("Skipped install git hooks");
        if json {
            println!("{}", emit_json(&SkippedOutput { skipped: true }, "install")?);
        }
        return Ok(());
    }

    let descriptor = context.load_descriptor()?;
    let hooks_dir = resolve_hooks_dir(context, dry_run)?;

    let env = ProcessEnvironment;
    let runner = NativeCommandRunner::new();
    let generator = HookContentGenerator::new(
        &config.hooks,
        &env,
        &config.properties,
        &runner,
        &descriptor.path,
    )
    .debug(config.install.debug);
    let installer = HookInstaller::new(
        &hooks_dir,
        &descriptor.artifact_id,
        config.install,
        &generator,
    );

    let report = if dry_run {
        installer.preview()?
    } else {
        installer.install()?
    };

    if json {
        println!("{}", emit_json(&report, "install")?);
    } else if dry_run {
        print_preview(&report);
    } else {
        print_summary(&report);
    }

    Ok(())
}

/// Dry runs must not create the hooks directory.
fn resolve_hooks_dir(context: &ProjectContext, dry_run: bool) -> Result<Utf8PathBuf, GhmpError> {
    if dry_run {
        Ok(locate(&context.project_dir)?.join(HOOKS_DIR))
    } else {
        Ok(hooks_directory(&context.project_dir)?)
    }
}

fn print_summary(report: &InstallReport) {
    if report.installed.is_empty() {
        println!("No hook content configured; nothing installed.");
        return;
    }

    println!(
        "Installed git hooks for {} in {}",
        report.artifact_id, report.hooks_directory
    );
    for installed in &report.installed {
        println!("  ✓ {} → {}", installed.hook, installed.plugin_script);
    }
    for hook in &report.skipped {
        println!("  - {hook} (no content)");
    }
}

fn print_preview(report: &InstallReport) {
    println!(
        "Dry run: nothing written to {} (artifact {})",
        report.hooks_directory, report.artifact_id
    );
    for installed in &report.installed {
        println!();
        println!("==> {} <==", installed.plugin_script);
        print!("{}", installed.content);
        println!("--- appended to {}:", installed.base_script);
        println!("{}", installed.command_call);
    }
    if report.truncated_base_scripts {
        println!();
        println!("Base scripts would be truncated before the call line is added.");
    }
}
