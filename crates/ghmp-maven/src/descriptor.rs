//! Project descriptor (`pom.xml`) location and artifact id.
//!
//! Only the artifact id is read, with a pair of regular expressions rather
//! than an XML parser: comments and the `<parent>` block are stripped, then
//! the first remaining `<artifactId>` is taken.

use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use ghmp_utils::error::ConfigError;
use ghmp_utils::paths::{absolute, normalize_lexically};

/// Descriptor file name looked up in the project directory
pub const DEFAULT_DESCRIPTOR: &str = "pom.xml";

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static PARENT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<parent>.*?</parent>").unwrap());
static ARTIFACT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<artifactId>\s*([^<\s]+)\s*</artifactId>").unwrap());

/// The project whose hooks are installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Absolute path of the descriptor, passed to Maven with `-f`
    pub path: PathBuf,
    /// Prefix of every plugin script name
    pub artifact_id: String,
}

impl ProjectDescriptor {
    /// Locate the descriptor and determine the artifact id.
    ///
    /// `descriptor` defaults to `<project_dir>/pom.xml`; a relative path is
    /// taken relative to `project_dir`. When `artifact_id` is given the file
    /// is not read at all.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DescriptorUnreadable`] when the file must be read and can't be
    /// - [`ConfigError::MissingArtifactId`] when it declares no artifact id
    pub fn load(
        project_dir: &Path,
        descriptor: Option<&Path>,
        artifact_id: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = descriptor_path(project_dir, descriptor);

        if let Some(artifact_id) = artifact_id.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(Self {
                path,
                artifact_id: artifact_id.to_string(),
            });
        }

        let xml = fs::read_to_string(&path).map_err(|e| ConfigError::DescriptorUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let artifact_id =
            parse_artifact_id(&xml).ok_or_else(|| ConfigError::MissingArtifactId {
                path: path.display().to_string(),
            })?;

        debug!(path = %path.display(), artifact_id = %artifact_id, "Read project descriptor");

        Ok(Self { path, artifact_id })
    }
}

/// Absolute, lexically normalized descriptor path for `project_dir`.
#[must_use]
pub fn descriptor_path(project_dir: &Path, descriptor: Option<&Path>) -> PathBuf {
    let path = project_dir.join(descriptor.unwrap_or(Path::new(DEFAULT_DESCRIPTOR)));
    normalize_lexically(&absolute(&path))
}

/// First `<artifactId>` outside comments and the `<parent>` block.
#[must_use]
pub fn parse_artifact_id(xml: &str) -> Option<String> {
    let without_comments = COMMENT.replace_all(xml, "");
    let own = PARENT_BLOCK.replace_all(&without_comments, "");

    ARTIFACT_ID
        .captures(&own)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
