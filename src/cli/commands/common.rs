//! Shared helpers for command implementations

use anyhow::Result;
use std::path::PathBuf;

use crate::{GhmpError, ProjectDescriptor};

/// Project selection shared by every command.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_dir: PathBuf,
    /// `--pom`, relative to `project_dir`
    pub descriptor: Option<PathBuf>,
    /// `--artifact-id`
    pub artifact_id: Option<String>,
}

impl ProjectContext {
    /// Locate the descriptor and determine the artifact id.
    pub fn load_descriptor(&self) -> Result<ProjectDescriptor> {
        ProjectDescriptor::load(
            &self.project_dir,
            self.descriptor.as_deref(),
            self.artifact_id.as_deref(),
        )
        .map_err(|e| GhmpError::from(e).into())
    }

    /// Descriptor path without reading the file.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        ghmp_maven::descriptor_path(&self.project_dir, self.descriptor.as_deref())
    }
}
