use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use ghmp_runner::{CommandRunner, CommandSpec};
use ghmp_utils::error::ToolError;
use ghmp_utils::lookup::Lookup;
use ghmp_utils::paths::shell_quoted_path;
use ghmp_utils::types::MAVEN_HOME_PROPERTY;

/// Launcher name for normal runs
pub const MAVEN_EXECUTABLE: &str = "mvn";
/// Launcher name that waits for a debugger
pub const MAVEN_DEBUG_EXECUTABLE: &str = "mvnDebug";

/// A Maven launcher that passed its probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ToolExecutable {
    /// `<maven.home>/bin/<launcher>`
    Installed(PathBuf),
    /// Bare launcher name, looked up through `PATH` when the hook runs
    OnSearchPath(String),
}

impl ToolExecutable {
    /// Text used for the launcher in a generated script.
    ///
    /// Installed paths are absolute, double-quoted and use forward slashes.
    /// Bare names are emitted unquoted so the shell resolves them at hook time.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Installed(path) => shell_quoted_path(path),
            Self::OnSearchPath(name) => name.clone(),
        }
    }
}

impl fmt::Display for ToolExecutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed(path) => write!(f, "{}", path.display()),
            Self::OnSearchPath(name) => write!(f, "{name}"),
        }
    }
}

/// Chooses the Maven launcher for generated hooks.
///
/// Candidates, in order:
/// 1. `<maven.home>/bin/mvn[Debug]` when the `maven.home` property is set
/// 2. `mvn[Debug]` on the search path
///
/// Each candidate is probed with `--version`; the first that exits with 0
/// wins. A failed probe only moves on to the next candidate.
pub struct MavenEnvironment<'a> {
    properties: &'a dyn Lookup,
    runner: &'a dyn CommandRunner,
    working_dir: Option<PathBuf>,
}

impl<'a> MavenEnvironment<'a> {
    #[must_use]
    pub fn new(properties: &'a dyn Lookup, runner: &'a dyn CommandRunner) -> Self {
        Self {
            properties,
            runner,
            working_dir: None,
        }
    }

    /// Run the `--version` checks from `dir` instead of the current directory.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Resolve the launcher, the debug variant when `debug` is set.
    ///
    /// # Errors
    ///
    /// [`ToolError::ExecutableNotFound`] listing every candidate when all
    /// probes fail.
    pub fn maven_executable(&self, debug: bool) -> Result<ToolExecutable, ToolError> {
        let name = if debug {
            MAVEN_DEBUG_EXECUTABLE
        } else {
            MAVEN_EXECUTABLE
        };
        let mut candidates = Vec::with_capacity(2);

        if let Some(maven_home) = self
            .properties
            .lookup(MAVEN_HOME_PROPERTY)
            .filter(|home| !home.trim().is_empty())
        {
            let candidate = Path::new(maven_home.trim()).join("bin").join(name);
            candidates.push(candidate.display().to_string());

            if self.probe(CommandSpec::new(&candidate)) {
                info!(executable = %candidate.display(), "Using Maven installation");
                return Ok(ToolExecutable::Installed(candidate));
            }
        } else {
            debug!(property = MAVEN_HOME_PROPERTY, "Property not set");
        }

        candidates.push(name.to_string());
        if self.probe(CommandSpec::new(name)) {
            match which::which(name) {
                Ok(resolved) => debug!(resolved = %resolved.display(), "Found {name} on PATH"),
                Err(e) => debug!(error = %e, "{name} ran but was not located on PATH"),
            }
            info!(executable = name, "Using Maven from PATH");
            return Ok(ToolExecutable::OnSearchPath(name.to_string()));
        }

        Err(ToolError::ExecutableNotFound {
            executable: name.to_string(),
            candidates,
        })
    }

    fn probe(&self, spec: CommandSpec) -> bool {
        let mut spec = spec.arg("--version");
        if let Some(dir) = &self.working_dir {
            spec = spec.cwd(dir);
        }
        match self.runner.run(&spec) {
            Ok(_) => true,
            Err(e) => {
                debug!(candidate = %spec.display(), error = %e, "Probe failed");
                false
            }
        }
    }
}
