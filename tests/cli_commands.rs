//! Tests for `ghmp show`, `ghmp locate`, `ghmp config` and global flags.

mod common;

use assert_cmd::assert::OutputAssertExt;
use common::Project;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_version() {
    let project = Project::bare();

    project
        .ghmp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ghmp "));
}

#[test]
fn test_unknown_hook_is_a_usage_error() {
    let project = Project::new();

    project
        .ghmp()
        .args(["show", "commit-msg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown hook"));
}

#[test]
fn test_show_prints_script_without_writing() {
    let project = Project::new();

    project
        .ghmp()
        .env("GHMP_SHOW_VAR", "on")
        .args([
            "show",
            "post-commit",
            "--post-commit",
            "echo committed",
            "--propagate-env",
            "post-commit=GHMP_SHOW_VAR",
        ])
        .assert()
        .success()
        .stdout("#!/bin/bash\nset -e\n\nexport GHMP_SHOW_VAR=\"on\"\n\necho committed\n");

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_show_does_not_need_descriptor() {
    let project = Project::bare();

    project
        .ghmp()
        .args(["show", "pre-commit", "--pre-commit", "true"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\ntrue\n"));
}

#[test]
fn test_locate_plain_repository() {
    let project = Project::new();

    project
        .ghmp()
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Git directory:"))
        .stdout(predicate::str::contains("does not exist yet"));

    assert!(!project.hooks_dir().exists());
}

#[test]
fn test_locate_from_subdirectory_json() {
    let project = Project::new();
    let module = project.root().join("module").join("src");
    fs::create_dir_all(&module).unwrap();
    fs::create_dir_all(project.hooks_dir()).unwrap();

    let output = project
        .ghmp()
        .arg("--project-dir")
        .arg(&module)
        .args(["locate", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let located: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let git_dir = located["git_dir"].as_str().unwrap();
    assert!(git_dir.ends_with(".git"));
    assert_eq!(located["hooks_dir_exists"], true);
}

#[test]
fn test_locate_follows_worktree_pointer() {
    let project = Project::bare();
    let metadata = project.root().join("main").join(".git").join("worktrees").join("wt");
    fs::create_dir_all(&metadata).unwrap();
    let worktree = project.root().join("wt");
    fs::create_dir_all(&worktree).unwrap();
    fs::write(worktree.join(".git"), "gitdir: ../main/.git/worktrees/wt\n").unwrap();

    project
        .ghmp()
        .arg("--project-dir")
        .arg(&worktree)
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("worktrees/wt/hooks"));
}

#[test]
fn test_locate_without_repository() {
    let project = Project::bare();

    project.ghmp().arg("locate").assert().code(3);
}

#[test]
fn test_config_shows_sources() {
    let project = Project::new();
    project.write_config(
        r#"
[install]
truncate_base_scripts = true

[hooks.pre-push]
content = "verify"
"#,
    );

    project
        .ghmp()
        .env("MAVEN_HOME", "/opt/maven")
        .args(["config", "--pre-commit", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::is_match(r#"hooks\.pre-commit\.content\s+= "validate"\s+\[cli\]"#).unwrap())
        .stdout(predicate::str::is_match(r#"hooks\.pre-push\.content\s+= "verify"\s+\[config\]"#).unwrap())
        .stdout(predicate::str::is_match(r#"install\.skip\s+= "false"\s+\[default\]"#).unwrap())
        .stdout(predicate::str::is_match(r#"properties\.maven\.home\s+= "/opt/maven"\s+\[env\]"#).unwrap());
}

#[test]
fn test_relative_project_dir_finds_config_above_it() {
    let project = Project::new();
    project.write_config("[hooks.pre-push]\ncontent = \"verify\"\n");
    fs::create_dir_all(project.root().join("module")).unwrap();

    let output = project
        .ghmp()
        .args(["--project-dir", "module", "config", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(config["config_path"].as_str().unwrap().ends_with("config.toml"));
    assert_eq!(config["values"]["hooks.pre-push.content"]["value"], "verify");
}

#[test]
fn test_config_json() {
    let project = Project::new();

    let output = project
        .ghmp()
        .args(["config", "--json", "-Dprofile=ci"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(config["config_path"].is_null());
    assert_eq!(config["values"]["properties.profile"]["value"], "ci");
    assert_eq!(config["values"]["properties.profile"]["source"], "cli");
    assert_eq!(config["values"]["install.debug"]["source"], "default");
}
