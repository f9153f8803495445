//! Logging infrastructure for ghmp
//!
//! Structured logging through `tracing`; the subscriber is installed once by
//! the CLI. Library crates only emit events.

use std::io::IsTerminal;
use tracing::{Level, info, span};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::HookType;

/// Check if colored output should be used.
///
/// Returns true only if:
/// - stderr is a terminal (TTY)
/// - NO_COLOR environment variable is not set
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Default filter directive for the given verbosity.
///
/// `RUST_LOG` takes precedence when set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "ghmp=debug,info"
    } else {
        "ghmp=info,warn"
    }
}

/// Initialize the tracing subscriber.
///
/// Compact, human-readable output on stderr so that stdout stays free for
/// command output (`show`, `--json`). Verbose mode adds targets.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color())
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Span covering one installation run.
pub fn install_span(artifact_id: &str) -> tracing::Span {
    span!(Level::INFO, "install", artifact_id = %artifact_id)
}

/// Log that one hook type has been written and wired.
pub fn log_hook_installed(hook: HookType, plugin_script: &str, base_script: &str) {
    info!(
        hook = %hook,
        plugin_script = %plugin_script,
        base_script = %base_script,
        "Installed hook"
    );
}
