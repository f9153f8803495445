//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and all subcommand enums.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ghmp_utils::types::HookType;

/// ghmp - git hook installer for Maven projects
#[derive(Parser, Debug)]
#[command(name = "ghmp")]
#[command(about = "Install git hooks that run shell commands or Maven goals")]
#[command(long_about = r#"
ghmp writes one plugin script per git hook into the repository's hooks
directory and adds a call to it at the end of the hook's base script.
Existing base script content is kept; repeated installs never duplicate
the call line.

EXAMPLES:
  # Run `mvn -f pom.xml validate` before every commit
  ghmp install --pre-commit validate --maven-prefix pre-commit

  # Run a plain shell command before every push
  ghmp install --pre-push "./scripts/check.sh"

  # Pass JAVA_HOME and a Maven property through to the hook
  ghmp install --pre-push verify --maven-prefix pre-push \
      --propagate-env pre-push=JAVA_HOME \
      --propagate-property pre-push=skipTests -DskipTests=true

  # Preview the generated scripts without writing anything
  ghmp install --pre-commit validate --dry-run

  # Print the script one hook would get
  ghmp show pre-commit

  # Print the git metadata and hooks directories
  ghmp locate

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > environment > config file > defaults
  Config file is discovered by searching upward from the project directory for .ghmp/config.toml
  Use --config to specify an explicit config file path
  GHMP_SKIP=1 skips installation; MAVEN_HOME seeds the maven.home property

HOOK FILES:
  <git-dir>/hooks/<artifactId>.git-hook.<hook>.sh   plugin script, rewritten on every install
  <git-dir>/hooks/<hook>                            base script, gets one call line appended
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Project descriptor, relative to the project directory [default: pom.xml]
    #[arg(long, global = true, value_name = "FILE")]
    pub pom: Option<PathBuf>,

    /// Artifact id used to name plugin scripts (read from the descriptor when omitted)
    #[arg(long, global = true)]
    pub artifact_id: Option<String>,

    /// Define a property, e.g. -DskipTests=true (repeatable)
    #[arg(
        short = 'D',
        long = "define",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_property
    )]
    pub define: Vec<(String, String)>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the configured hooks into the repository
    Install(InstallArgs),

    /// Print the script that would be installed for one hook
    Show {
        /// Hook type (pre-commit, pre-push, post-commit)
        #[arg(value_parser = parse_hook)]
        hook: HookType,

        #[command(flatten)]
        hooks: HookArgs,
    },

    /// Print the git metadata directory and its hooks directory
    Locate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration and the source of each value
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        hooks: HookArgs,
    },
}

/// Options of `ghmp install`.
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Skip installation entirely
    #[arg(long)]
    pub skip: bool,

    /// Empty base scripts before adding the call line
    #[arg(long)]
    pub truncate_base_scripts: bool,

    /// Print generated scripts and write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Output the install report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub hooks: HookArgs,
}

/// Hook settings accepted by every command that renders scripts.
#[derive(Args, Debug, Default, Clone)]
pub struct HookArgs {
    /// Command run by the pre-commit hook
    #[arg(long, value_name = "CONTENT")]
    pub pre_commit: Option<String>,

    /// Command run by the pre-push hook
    #[arg(long, value_name = "CONTENT")]
    pub pre_push: Option<String>,

    /// Command run by the post-commit hook
    #[arg(long, value_name = "CONTENT")]
    pub post_commit: Option<String>,

    /// Prefix the hook's command with the Maven launcher (repeatable)
    #[arg(long, value_name = "HOOK", value_parser = parse_hook)]
    pub maven_prefix: Vec<HookType>,

    /// Export an environment variable in a hook script (repeatable)
    #[arg(long, value_name = "HOOK=NAME", value_parser = parse_hook_entry)]
    pub propagate_env: Vec<(HookType, String)>,

    /// Pass a property to Maven as -Dname=value (repeatable)
    #[arg(long, value_name = "HOOK=NAME", value_parser = parse_hook_entry)]
    pub propagate_property: Vec<(HookType, String)>,

    /// Use mvnDebug instead of mvn
    #[arg(long)]
    pub debug: bool,
}

impl HookArgs {
    /// Content given on the command line, in hook order.
    #[must_use]
    pub fn hook_content(&self) -> Vec<(HookType, String)> {
        [
            (HookType::PreCommit, &self.pre_commit),
            (HookType::PrePush, &self.pre_push),
            (HookType::PostCommit, &self.post_commit),
        ]
        .into_iter()
        .filter_map(|(hook, content)| content.clone().map(|content| (hook, content)))
        .collect()
    }
}

/// Parse a hook type name.
pub fn parse_hook(value: &str) -> Result<HookType, String> {
    value.trim().parse::<HookType>().map_err(|_| {
        let known: Vec<&str> = HookType::all().map(HookType::name).collect();
        format!("unknown hook '{value}' (expected one of: {})", known.join(", "))
    })
}

/// Parse `<hook>=<name>`.
pub fn parse_hook_entry(value: &str) -> Result<(HookType, String), String> {
    let (hook, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <hook>=<name>, got '{value}'"))?;
    Ok((parse_hook(hook)?, name.to_string()))
}

/// Parse `KEY=VALUE`; a bare `KEY` defines the property as `true`, as Maven does.
pub fn parse_property(value: &str) -> Result<(String, String), String> {
    let (key, value) = value.split_once('=').unwrap_or((value, "true"));
    if key.trim().is_empty() {
        return Err("property name must not be empty".to_string());
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Build the clap command (used by tests and shell completion generation).
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}
