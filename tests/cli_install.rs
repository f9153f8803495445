//! End-to-end tests for `ghmp install`.

mod common;

use assert_cmd::assert::OutputAssertExt;
use common::{PRE_COMMIT_CALL, Project};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_install_writes_plugin_and_base_script() {
    let project = Project::new();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo 'checking'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed git hooks for demo-app"))
        .stdout(predicate::str::contains("✓ pre-commit"));

    assert_eq!(
        project.read_hook("demo-app.git-hook.pre-commit.sh"),
        "#!/bin/bash\nset -e\n\n\necho 'checking'\n"
    );
    assert_eq!(project.read_hook("pre-commit"), format!("{PRE_COMMIT_CALL}\n"));
    assert!(!project.hook_file("pre-push").exists());
    assert!(!project.hook_file("post-commit").exists());
}

#[cfg(unix)]
#[test]
fn test_installed_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::new();

    project
        .ghmp()
        .args(["install", "--post-commit", "echo done"])
        .assert()
        .success();

    for name in ["demo-app.git-hook.post-commit.sh", "post-commit"] {
        let mode = fs::metadata(project.hook_file(name))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111, "{name} is not executable");
    }
}

#[test]
fn test_reinstall_keeps_user_content_and_single_call() {
    let project = Project::new();
    fs::create_dir_all(project.hooks_dir()).unwrap();
    fs::write(project.hook_file("pre-commit"), "#!/bin/sh\n./lint.sh\n").unwrap();

    for _ in 0..2 {
        project
            .ghmp()
            .args(["install", "--pre-commit", "echo hi"])
            .assert()
            .success();
    }

    assert_eq!(
        project.read_hook("pre-commit"),
        format!("#!/bin/sh\n./lint.sh\n{PRE_COMMIT_CALL}\n")
    );
}

#[cfg(unix)]
#[test]
fn test_reinstall_keeps_base_script_mode() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::new();
    fs::create_dir_all(project.hooks_dir()).unwrap();
    let base = project.hook_file("pre-commit");
    fs::write(&base, "#!/bin/sh\n./lint.sh\n").unwrap();
    fs::set_permissions(&base, fs::Permissions::from_mode(0o755)).unwrap();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi"])
        .assert()
        .success();

    let mode = fs::metadata(&base).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
}

#[cfg(unix)]
#[test]
fn test_symlinked_base_script_is_updated_through_link() {
    let project = Project::new();
    fs::create_dir_all(project.hooks_dir()).unwrap();
    let shared = project.root().join("shared-pre-commit");
    fs::write(&shared, "#!/bin/sh\necho shared\n").unwrap();
    std::os::unix::fs::symlink(&shared, project.hook_file("pre-commit")).unwrap();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi"])
        .assert()
        .success();

    let link = fs::symlink_metadata(project.hook_file("pre-commit")).unwrap();
    assert!(link.file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(&shared).unwrap(),
        format!("#!/bin/sh\necho shared\n{PRE_COMMIT_CALL}\n")
    );
}

#[test]
fn test_truncate_base_scripts() {
    let project = Project::new();
    fs::create_dir_all(project.hooks_dir()).unwrap();
    fs::write(project.hook_file("pre-commit"), "old content\n").unwrap();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi", "--truncate-base-scripts"])
        .assert()
        .success();

    assert_eq!(project.read_hook("pre-commit"), format!("{PRE_COMMIT_CALL}\n"));
}

#[test]
fn test_config_file_drives_install() {
    let project = Project::new();
    project.write_config(
        r#"
[hooks.pre-push]
content = "./check.sh"
env_to_propagate = ["GHMP_TEST_TOKEN"]
"#,
    );

    project
        .ghmp()
        .env("GHMP_TEST_TOKEN", "abc 123")
        .arg("install")
        .assert()
        .success();

    assert_eq!(
        project.read_hook("demo-app.git-hook.pre-push.sh"),
        "#!/bin/bash\nset -e\n\nexport GHMP_TEST_TOKEN=\"abc 123\"\n\n./check.sh\n"
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = Project::new();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("==> "))
        .stdout(predicate::str::contains(PRE_COMMIT_CALL));

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_json_report() {
    let project = Project::new();

    let output = project
        .ghmp()
        .args(["install", "--pre-push", "./push.sh", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["artifact_id"], "demo-app");
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["installed"][0]["hook"], "pre-push");
    assert_eq!(
        report["skipped"],
        serde_json::json!(["pre-commit", "post-commit"])
    );
}

#[test]
fn test_artifact_id_flag_skips_descriptor() {
    let project = Project::bare();
    fs::create_dir(project.root().join(".git")).unwrap();

    project
        .ghmp()
        .args(["install", "--artifact-id", "custom", "--pre-commit", "true"])
        .assert()
        .success();

    assert!(project.hook_file("custom.git-hook.pre-commit.sh").exists());
}

#[test]
fn test_skip_flag_touches_nothing() {
    let project = Project::bare();

    project
        .ghmp()
        .args(["install", "--skip", "--pre-commit", "echo hi"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped install git hooks"));

    assert_eq!(fs::read_dir(project.root()).unwrap().count(), 0);
}

#[test]
fn test_skip_environment_variable() {
    let project = Project::new();

    project
        .ghmp()
        .env("GHMP_SKIP", "true")
        .args(["install", "--pre-commit", "echo hi"])
        .assert()
        .success();

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_missing_repository_exit_code() {
    let project = Project::bare();
    fs::write(project.root().join("pom.xml"), common::POM).unwrap();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_missing_descriptor_exit_code() {
    let project = Project::bare();
    fs::create_dir(project.root().join(".git")).unwrap();

    project
        .ghmp()
        .args(["install", "--pre-commit", "echo hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pom.xml"));
}

#[test]
fn test_invalid_config_exit_code() {
    let project = Project::new();
    project.write_config("[hooks.pre-commit]\nunknown_key = 1\n");

    project.ghmp().arg("install").assert().code(2);
}

#[test]
fn test_invalid_propagated_name_exit_code() {
    let project = Project::new();

    project
        .ghmp()
        .args([
            "install",
            "--pre-commit",
            "echo hi",
            "--propagate-env",
            "pre-commit=BAD NAME",
        ])
        .assert()
        .code(2);

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_env_name_that_is_not_a_shell_identifier_is_rejected() {
    let project = Project::new();

    project
        .ghmp()
        .args([
            "install",
            "--pre-commit",
            "echo hi",
            "--propagate-env",
            "pre-commit=A-B",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hooks.pre-commit.env_to_propagate"));

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_unresolvable_maven_exit_code() {
    let project = Project::new();
    let empty_path = tempfile::TempDir::new().unwrap();

    project
        .ghmp()
        .env("PATH", empty_path.path())
        .args(["install", "--pre-commit", "validate", "--maven-prefix", "pre-commit"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("mvn"));

    assert!(!project.hook_file("demo-app.git-hook.pre-commit.sh").exists());
}

#[cfg(unix)]
#[test]
fn test_maven_home_launcher() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::new();
    let maven_home = tempfile::TempDir::new().unwrap();
    let bin = maven_home.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    let launcher = bin.join("mvn");
    fs::write(&launcher, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755)).unwrap();

    project
        .ghmp()
        .env("MAVEN_HOME", maven_home.path())
        .arg("--project-dir")
        .arg(project.root())
        .args([
            "install",
            "--pre-push",
            "verify",
            "--maven-prefix",
            "pre-push",
            "--propagate-property",
            "pre-push=skipTests",
            "-DskipTests=true",
        ])
        .assert()
        .success();

    let script = project.read_hook("demo-app.git-hook.pre-push.sh");
    let pom = project.root().join("pom.xml");
    assert_eq!(
        script.lines().last().unwrap(),
        format!(
            "\"{}\" -f \"{}\" -DskipTests=true verify",
            launcher.display(),
            pom.display()
        )
    );
}
