use camino::Utf8Path;

use ghmp_utils::error::ScriptError;

use crate::ExecutableScript;

/// Hands out [`ExecutableScript`] handles for hook files.
///
/// Handles carry no cached state, so asking twice for the same path yields
/// equivalent handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRegistry;

impl ScriptRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Handle for `path`, creating an empty executable file when absent.
    pub fn get_or_create(&self, path: &Utf8Path) -> Result<ExecutableScript, ScriptError> {
        ExecutableScript::create(path)
    }
}
