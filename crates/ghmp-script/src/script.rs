use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

use ghmp_utils::atomic_write::write_file_atomic;
use ghmp_utils::error::ScriptError;

/// Mode of a script created from scratch
#[cfg(unix)]
const NEW_SCRIPT_MODE: u32 = 0o755;

const MAX_SYMLINK_HOPS: usize = 40;

/// A shell script on disk that is kept executable.
///
/// The handle holds only the path; every operation re-reads the file. All
/// mutations create the file (empty, executable) first when it is missing,
/// and leave it executable afterwards. Mutating operations return `&Self` so
/// they can be chained:
///
/// ```rust,no_run
/// # use ghmp_script::ExecutableScript;
/// # fn demo(script: &ExecutableScript) -> Result<(), ghmp_utils::error::ScriptError> {
/// script.truncate()?.write("#!/bin/bash\nset -e\n\n\necho hi\n")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableScript {
    path: Utf8PathBuf,
}

impl ExecutableScript {
    /// Bind to `path`, creating an empty executable file (and its parent
    /// directories) when nothing exists there yet.
    pub fn create(path: impl Into<Utf8PathBuf>) -> Result<Self, ScriptError> {
        let script = Self { path: path.into() };
        script.ensure_exists()?;
        Ok(script)
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Current text of the script; empty when the file does not exist.
    pub fn content(&self) -> Result<String, ScriptError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.failure(format!("Failed to read: {e}"))),
        }
    }

    /// Make the script empty.
    pub fn truncate(&self) -> Result<&Self, ScriptError> {
        self.replace_content("")?;
        Ok(self)
    }

    /// Replace the whole content with `text`.
    pub fn write(&self, text: &str) -> Result<&Self, ScriptError> {
        self.replace_content(text)?;
        Ok(self)
    }

    /// Append `line` as its own line unless an identical line is present.
    ///
    /// A newline is inserted first when the current content does not end
    /// with one.
    pub fn append_command_call(&self, line: &str) -> Result<&Self, ScriptError> {
        self.ensure_exists()?;
        let content = self.content()?;

        if has_line(&content, line) {
            debug!(path = %self.path, "Command call already present");
            self.set_executable()?;
            return Ok(self);
        }

        self.replace_content(&with_line_appended(&content, line))?;
        Ok(self)
    }

    /// Remove every line exactly equal to `line`.
    ///
    /// All other bytes are kept in order. When something was removed and
    /// content remains, the result ends with a newline. The executable bit
    /// is re-applied either way.
    pub fn remove_command_call(&self, line: &str) -> Result<&Self, ScriptError> {
        self.ensure_exists()?;
        let content = self.content()?;

        match without_line(&content, line) {
            Some(updated) => {
                debug!(path = %self.path, "Removed command call");
                self.replace_content(&updated)?;
            }
            None => self.set_executable()?,
        }

        Ok(self)
    }

    fn ensure_exists(&self) -> Result<(), ScriptError> {
        if self.path.exists() {
            return Ok(());
        }

        debug!(path = %self.path, "Creating executable script");
        self.replace_content("")
    }

    /// Rewrite the file behind the script. A symlinked script keeps its link
    /// and the target gets the new content; an existing file keeps its mode.
    fn replace_content(&self, text: &str) -> Result<(), ScriptError> {
        let target = self.resolve_target()?;
        let prior_mode = file_mode(&target);

        write_file_atomic(&target, text).map_err(|e| self.failure(format!("{e:#}")))?;
        self.restore_mode(&target, prior_mode)
    }

    fn resolve_target(&self) -> Result<Utf8PathBuf, ScriptError> {
        let mut target = self.path.clone();

        for _ in 0..MAX_SYMLINK_HOPS {
            match fs::symlink_metadata(&target) {
                Ok(metadata) if metadata.file_type().is_symlink() => {
                    let link = fs::read_link(&target)
                        .map_err(|e| self.failure(format!("Failed to read symlink: {e}")))?;
                    let link = Utf8PathBuf::from_path_buf(link).map_err(|link| {
                        self.failure(format!("Symlink target is not UTF-8: {}", link.display()))
                    })?;
                    target = match target.parent() {
                        Some(parent) => parent.join(link),
                        None => link,
                    };
                }
                _ => return Ok(target),
            }
        }

        Err(self.failure("Too many levels of symbolic links".to_string()))
    }

    #[cfg(unix)]
    fn restore_mode(&self, target: &Utf8Path, prior_mode: Option<u32>) -> Result<(), ScriptError> {
        use std::os::unix::fs::PermissionsExt;

        let mode = prior_mode.unwrap_or(NEW_SCRIPT_MODE) | 0o111;
        fs::set_permissions(target, fs::Permissions::from_mode(mode))
            .map_err(|e| self.failure(format!("Failed to set executable permission: {e}")))
    }

    #[cfg(not(unix))]
    fn restore_mode(&self, _target: &Utf8Path, _prior_mode: Option<u32>) -> Result<(), ScriptError> {
        Ok(())
    }

    #[cfg(unix)]
    fn set_executable(&self) -> Result<(), ScriptError> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(&self.path)
            .map_err(|e| self.failure(format!("Failed to read permissions: {e}")))?;
        let mut permissions = metadata.permissions();
        let mode = permissions.mode();
        if mode & 0o111 == 0o111 {
            return Ok(());
        }

        permissions.set_mode(mode | 0o111);
        fs::set_permissions(&self.path, permissions)
            .map_err(|e| self.failure(format!("Failed to set executable permission: {e}")))
    }

    #[cfg(not(unix))]
    fn set_executable(&self) -> Result<(), ScriptError> {
        Ok(())
    }

    fn failure(&self, reason: String) -> ScriptError {
        ScriptError::WriteFailure {
            path: self.path.to_string(),
            reason,
        }
    }
}

impl std::fmt::Display for ExecutableScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Permission bits of an existing file; `None` when there is none.
#[cfg(unix)]
fn file_mode(path: &Utf8Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .ok()
        .map(|metadata| metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Utf8Path) -> Option<u32> {
    None
}

fn lines_of(content: &str) -> impl Iterator<Item = &str> {
    content
        .split_inclusive('\n')
        .map(|segment| segment.strip_suffix('\n').unwrap_or(segment))
}

fn has_line(content: &str, line: &str) -> bool {
    lines_of(content).any(|existing| existing == line)
}

pub(crate) fn with_line_appended(content: &str, line: &str) -> String {
    let mut updated = String::with_capacity(content.len() + line.len() + 2);
    updated.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(line);
    updated.push('\n');
    updated
}

/// `None` when no line matched.
pub(crate) fn without_line(content: &str, line: &str) -> Option<String> {
    let mut removed = false;
    let mut updated = String::with_capacity(content.len());

    for segment in content.split_inclusive('\n') {
        if segment.strip_suffix('\n').unwrap_or(segment) == line {
            removed = true;
        } else {
            updated.push_str(segment);
        }
    }

    if !removed {
        return None;
    }

    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }

    Some(updated)
}
