//! Locate command implementation
//!
//! Handles `ghmp locate` and `ghmp locate --json`. Nothing is created.

use anyhow::Result;
use serde::Serialize;

use super::common::ProjectContext;
use super::json_emit::emit_json;

use crate::{GhmpError, HOOKS_DIR, locate};

#[derive(Serialize)]
struct LocateOutput {
    git_dir: String,
    hooks_dir: String,
    hooks_dir_exists: bool,
}

/// Execute the locate command
pub fn execute_locate_command(context: &ProjectContext, json: bool) -> Result<()> {
    let git_dir = locate(&context.project_dir).map_err(GhmpError::from)?;
    let hooks_dir = git_dir.join(HOOKS_DIR);

    let output = LocateOutput {
        hooks_dir_exists: hooks_dir.is_dir(),
        git_dir: git_dir.into_string(),
        hooks_dir: hooks_dir.into_string(),
    };

    if json {
        println!("{}", emit_json(&output, "locate")?);
    } else {
        println!("Git directory:   {}", output.git_dir);
        println!("Hooks directory: {}", output.hooks_dir);
        if !output.hooks_dir_exists {
            println!("  (does not exist yet; created by install)");
        }
    }

    Ok(())
}
