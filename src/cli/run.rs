//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Installs the tracing subscriber
//! - Builds CliArgs and discovers Config
//! - Dispatches to command handlers
//! - Handles all error output

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use super::args::{Cli, Commands, HookArgs};
use super::commands::{self, ProjectContext};

use crate::{CliArgs, Config, ExitCode, GhmpError, ProcessEnvironment};
use ghmp_utils::logging::init_tracing;
use ghmp_utils::paths::normalize_lexically;

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns `Result<(), ExitCode>`:
/// - On success: returns `Ok(())` after printing any output
/// - On error: prints the user-facing report to stderr, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it does NOT print.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let project_dir = match resolve_project_dir(cli.project_dir.clone()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("✗ Failed to determine the project directory: {e}");
            return Err(ExitCode::INTERNAL);
        }
    };

    let cli_args = build_cli_args(&cli);

    let config = match Config::discover_from(&project_dir, &cli_args, &ProcessEnvironment) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    let context = ProjectContext {
        project_dir,
        descriptor: cli.pom.clone(),
        artifact_id: cli.artifact_id.clone(),
    };

    let result = match cli.command {
        Commands::Install(args) => {
            commands::execute_install_command(&context, args.dry_run, args.json, &config)
        }
        Commands::Show { hook, .. } => commands::execute_show_command(&context, hook, &config),
        Commands::Locate { json } => commands::execute_locate_command(&context, json),
        Commands::Config { json, .. } => commands::execute_config_command(json, &config),
    };

    if let Err(error) = result {
        if let Some(ghmp_error) = error.downcast_ref::<GhmpError>() {
            eprintln!("{}", ghmp_error.display_for_user());
            return Err(ghmp_error.to_exit_code());
        }

        eprintln!("✗ Unexpected error: {error:#}");
        eprintln!("\n  General troubleshooting:");
        eprintln!("    - Run with --verbose for more detailed output");
        eprintln!("    - Check that the project directory is inside a git repository");
        return Err(ExitCode::INTERNAL);
    }

    Ok(())
}

fn resolve_project_dir(project_dir: Option<PathBuf>) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(project_dir_from(&cwd, project_dir))
}

/// Absolute, lexically normalized project directory; `cwd` when none is given.
pub(crate) fn project_dir_from(cwd: &Path, project_dir: Option<PathBuf>) -> PathBuf {
    match project_dir {
        Some(dir) => normalize_lexically(&cwd.join(dir)),
        None => cwd.to_path_buf(),
    }
}

/// Map parsed arguments onto the configuration layer.
///
/// Boolean flags only override lower layers when set; an absent flag leaves
/// the config file or environment in charge.
pub(crate) fn build_cli_args(cli: &Cli) -> CliArgs {
    let mut cli_args = CliArgs {
        config_path: cli.config.clone(),
        properties: cli.define.clone(),
        ..CliArgs::default()
    };

    let hooks: Option<&HookArgs> = match &cli.command {
        Commands::Install(args) => {
            cli_args.skip = args.skip.then_some(true);
            cli_args.truncate_base_scripts = args.truncate_base_scripts.then_some(true);
            Some(&args.hooks)
        }
        Commands::Show { hooks, .. } | Commands::Config { hooks, .. } => Some(hooks),
        Commands::Locate { .. } => None,
    };

    if let Some(hooks) = hooks {
        cli_args.debug = hooks.debug.then_some(true);
        cli_args.hook_content = hooks.hook_content();
        cli_args.maven_prefix = hooks.maven_prefix.clone();
        cli_args.env_to_propagate = hooks.propagate_env.clone();
        cli_args.properties_to_propagate = hooks.propagate_property.clone();
    }

    cli_args
}
