use camino::Utf8Path;
use tracing::{debug, info};

use ghmp_config::InstallOptions;
use ghmp_script::ScriptRegistry;
use ghmp_utils::error::GhmpError;
use ghmp_utils::logging::{install_span, log_hook_installed};
use ghmp_utils::types::HookType;

use crate::generator::HookContentGenerator;
use crate::report::{InstallReport, InstalledHook};

/// Name of the plugin script for `hook`: `<artifactId>.git-hook.<name>.sh`.
#[must_use]
pub fn plugin_script_name(artifact_id: &str, hook: HookType) -> String {
    format!("{artifact_id}.{}", hook.plugin_script_suffix())
}

/// Line added to the base script so git runs the plugin script.
///
/// `git rev-parse --git-dir` is evaluated when the hook runs, so the line
/// stays valid if the repository is moved.
#[must_use]
pub fn command_call_line(artifact_id: &str, hook: HookType) -> String {
    format!(
        "$(git rev-parse --git-dir)/hooks/{}",
        plugin_script_name(artifact_id, hook)
    )
}

/// Writes plugin scripts and wires base scripts to call them.
///
/// Hook types are processed in order pre-commit, pre-push, post-commit. The
/// first failure aborts the run; scripts already written stay on disk.
pub struct HookInstaller<'a> {
    hooks_dir: &'a Utf8Path,
    artifact_id: &'a str,
    options: InstallOptions,
    generator: &'a HookContentGenerator<'a>,
    registry: ScriptRegistry,
}

impl<'a> HookInstaller<'a> {
    #[must_use]
    pub fn new(
        hooks_dir: &'a Utf8Path,
        artifact_id: &'a str,
        options: InstallOptions,
        generator: &'a HookContentGenerator<'a>,
    ) -> Self {
        Self {
            hooks_dir,
            artifact_id,
            options,
            generator,
            registry: ScriptRegistry::new(),
        }
    }

    /// Install every hook type with non-blank content.
    pub fn install(&self) -> Result<InstallReport, GhmpError> {
        let span = install_span(self.artifact_id);
        let _guard = span.enter();

        info!("Installing git hooks");
        let mut report = self.empty_report(false);

        for hook in HookType::all() {
            if !self.generator.settings(hook).is_enabled() {
                debug!(hook = %hook, "No content configured, leaving hook untouched");
                report.skipped.push(hook);
                continue;
            }

            report.installed.push(self.install_hook(hook)?);
        }

        info!(count = report.installed.len(), "Installed git hooks");
        Ok(report)
    }

    /// Generate what [`install`](Self::install) would write, touching nothing.
    pub fn preview(&self) -> Result<InstallReport, GhmpError> {
        let mut report = self.empty_report(true);

        for hook in HookType::all() {
            if !self.generator.settings(hook).is_enabled() {
                report.skipped.push(hook);
                continue;
            }

            let content = self.generator.generate(hook)?;
            report.installed.push(self.describe(hook, content));
        }

        Ok(report)
    }

    fn install_hook(&self, hook: HookType) -> Result<InstalledHook, GhmpError> {
        let content = self.generator.generate(hook)?;
        let installed = self.describe(hook, content);

        debug!(hook = %hook, path = %installed.plugin_script, "Writing plugin hook file");
        self.registry
            .get_or_create(Utf8Path::new(&installed.plugin_script))?
            .truncate()?
            .write(&installed.content)?;

        let base = self
            .registry
            .get_or_create(Utf8Path::new(&installed.base_script))?;
        debug!(hook = %hook, path = %base, "Configuring base script");
        if self.options.truncate_base_scripts {
            base.truncate()?;
        } else {
            base.remove_command_call(&installed.command_call)?;
        }
        base.append_command_call(&installed.command_call)?;

        log_hook_installed(hook, &installed.plugin_script, &installed.base_script);
        Ok(installed)
    }

    fn describe(&self, hook: HookType, content: String) -> InstalledHook {
        InstalledHook {
            hook,
            plugin_script: self
                .hooks_dir
                .join(plugin_script_name(self.artifact_id, hook))
                .into_string(),
            base_script: self.hooks_dir.join(hook.base_script_name()).into_string(),
            command_call: command_call_line(self.artifact_id, hook),
            content,
        }
    }

    fn empty_report(&self, dry_run: bool) -> InstallReport {
        InstallReport {
            artifact_id: self.artifact_id.to_string(),
            hooks_directory: self.hooks_dir.to_string(),
            dry_run,
            truncated_base_scripts: self.options.truncate_base_scripts,
            installed: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use ghmp_config::{HookSettings, HooksConfig};
    use ghmp_runner::{CommandRunner, CommandSpec, RunnerError};
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct FakeRunner(Vec<&'static str>);

    impl CommandRunner for FakeRunner {
        fn run(&self, cmd: &CommandSpec) -> Result<String, RunnerError> {
            let program = cmd.program.to_string_lossy();
            if self.0.iter().any(|valid| *valid == program) {
                Ok(String::new())
            } else {
                Err(RunnerError::CommandRunFailure {
                    command: cmd.display(),
                    exit_code: 1,
                    output: String::new(),
                })
            }
        }
    }

    struct Fixture {
        _temp_dir: TempDir,
        hooks_dir: Utf8PathBuf,
        hooks: HooksConfig,
        env: HashMap<String, String>,
        props: HashMap<String, String>,
        runner: FakeRunner,
    }

    impl Fixture {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let hooks_dir = Utf8Path::from_path(temp_dir.path())
                .unwrap()
                .join(".git/hooks");
            fs::create_dir_all(&hooks_dir).unwrap();
            Self {
                _temp_dir: temp_dir,
                hooks_dir,
                hooks: HooksConfig::default(),
                env: HashMap::new(),
                props: HashMap::new(),
                runner: FakeRunner(vec!["mvn"]),
            }
        }

        fn content(mut self, hook: HookType, content: &str) -> Self {
            self.hooks.settings_mut(hook).content = content.to_string();
            self
        }

        fn run(&self, options: InstallOptions) -> Result<InstallReport, GhmpError> {
            let generator = HookContentGenerator::new(
                &self.hooks,
                &self.env,
                &self.props,
                &self.runner,
                Path::new("/work/app/pom.xml"),
            );
            HookInstaller::new(&self.hooks_dir, "demo-app", options, &generator).install()
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.hooks_dir.join(name)).unwrap()
        }
    }

    const PRE_COMMIT_CALL: &str = "$(git rev-parse --git-dir)/hooks/demo-app.git-hook.pre-commit.sh";

    #[test]
    fn test_names_and_call_line() {
        assert_eq!(
            plugin_script_name("demo-app", HookType::PrePush),
            "demo-app.git-hook.pre-push.sh"
        );
        assert_eq!(
            command_call_line("demo-app", HookType::PreCommit),
            PRE_COMMIT_CALL
        );
    }

    #[test]
    fn test_install_writes_plugin_and_wires_base_script() {
        let fixture = Fixture::new().content(HookType::PreCommit, "echo hi");

        let report = fixture.run(InstallOptions::default()).unwrap();

        assert_eq!(
            fixture.read("demo-app.git-hook.pre-commit.sh"),
            "#!/bin/bash\nset -e\n\n\necho hi\n"
        );
        assert_eq!(fixture.read("pre-commit"), format!("{PRE_COMMIT_CALL}\n"));
        assert_eq!(report.installed.len(), 1);
        assert_eq!(report.installed[0].hook, HookType::PreCommit);
        assert_eq!(
            report.skipped,
            vec![HookType::PrePush, HookType::PostCommit]
        );
        assert!(!report.dry_run);
    }

    #[test]
    fn test_reinstall_preserves_user_content_without_duplicates() {
        let fixture = Fixture::new().content(HookType::PreCommit, "echo hi");
        fs::write(
            fixture.hooks_dir.join("pre-commit"),
            "#!/bin/sh\n./lint.sh\n",
        )
        .unwrap();

        fixture.run(InstallOptions::default()).unwrap();
        fixture.run(InstallOptions::default()).unwrap();

        assert_eq!(
            fixture.read("pre-commit"),
            format!("#!/bin/sh\n./lint.sh\n{PRE_COMMIT_CALL}\n")
        );
    }

    #[test]
    fn test_truncate_base_scripts_drops_prior_content() {
        let fixture = Fixture::new().content(HookType::PreCommit, "echo hi");
        fs::write(
            fixture.hooks_dir.join("pre-commit"),
            "#!/bin/sh\nold stuff\n$(git rev-parse --git-dir)/hooks/other.git-hook.pre-commit.sh\n",
        )
        .unwrap();

        fixture
            .run(InstallOptions {
                truncate_base_scripts: true,
                ..InstallOptions::default()
            })
            .unwrap();

        assert_eq!(fixture.read("pre-commit"), format!("{PRE_COMMIT_CALL}\n"));
    }

    #[test]
    fn test_blank_content_leaves_base_script_untouched() {
        let fixture = Fixture::new().content(HookType::PrePush, "   ");
        fs::write(fixture.hooks_dir.join("pre-push"), "custom\n").unwrap();

        let report = fixture.run(InstallOptions::default()).unwrap();

        assert!(!fixture.hooks_dir.join("demo-app.git-hook.pre-push.sh").exists());
        assert_eq!(fixture.read("pre-push"), "custom\n");
        assert!(report.installed.is_empty());
    }

    #[test]
    fn test_failure_aborts_but_keeps_earlier_hooks() {
        let mut fixture = Fixture::new()
            .content(HookType::PreCommit, "echo first")
            .content(HookType::PrePush, "verify");
        *fixture.hooks.settings_mut(HookType::PrePush) = HookSettings {
            content: "verify".to_string(),
            maven_prefix: true,
            ..HookSettings::default()
        };
        fixture.runner = FakeRunner(vec![]);

        let err = fixture.run(InstallOptions::default()).unwrap_err();

        assert!(matches!(err, GhmpError::Tool(_)));
        assert!(fixture.hooks_dir.join("demo-app.git-hook.pre-commit.sh").exists());
        assert!(!fixture.hooks_dir.join("demo-app.git-hook.pre-push.sh").exists());
        assert!(!fixture.hooks_dir.join("pre-push").exists());
    }

    #[test]
    fn test_preview_writes_nothing() {
        let fixture = Fixture::new().content(HookType::PostCommit, "echo done");
        let generator = HookContentGenerator::new(
            &fixture.hooks,
            &fixture.env,
            &fixture.props,
            &fixture.runner,
            Path::new("/work/app/pom.xml"),
        );

        let report = HookInstaller::new(
            &fixture.hooks_dir,
            "demo-app",
            InstallOptions::default(),
            &generator,
        )
        .preview()
        .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.installed.len(), 1);
        assert!(report.installed[0].content.ends_with("echo done\n"));
        assert_eq!(fs::read_dir(&fixture.hooks_dir).unwrap().count(), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["installed"][0]["hook"], "post-commit");
    }
}
