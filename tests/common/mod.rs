//! Shared fixtures for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>parent-pom</artifactId>
    <version>1</version>
  </parent>
  <artifactId>demo-app</artifactId>
</project>
"#;

pub const PRE_COMMIT_CALL: &str =
    "$(git rev-parse --git-dir)/hooks/demo-app.git-hook.pre-commit.sh";

/// A temporary Maven project inside a git repository.
pub struct Project {
    pub temp_dir: TempDir,
}

impl Project {
    /// `.git/` directory and `pom.xml` declaring `demo-app`.
    pub fn new() -> Self {
        let project = Self::bare();
        fs::create_dir(project.root().join(".git")).unwrap();
        fs::write(project.root().join("pom.xml"), POM).unwrap();
        project
    }

    /// An empty directory: no repository, no descriptor.
    pub fn bare() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.root().join(".git").join("hooks")
    }

    pub fn hook_file(&self, name: &str) -> PathBuf {
        self.hooks_dir().join(name)
    }

    pub fn read_hook(&self, name: &str) -> String {
        fs::read_to_string(self.hook_file(name)).unwrap()
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.root().join(".ghmp");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }

    /// `ghmp` running in the project directory with a clean environment.
    pub fn ghmp(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghmp"));
        cmd.current_dir(self.root())
            .env_remove("GHMP_SKIP")
            .env_remove("MAVEN_HOME")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
