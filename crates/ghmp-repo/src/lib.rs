//! Locating the git metadata directory and its `hooks` subdirectory.
//!
//! The search starts at the project directory and walks upward. A `.git`
//! directory is taken as is; a `.git` file is a worktree pointer whose
//! `gitdir: <path>` line names the real metadata directory.

use camino::Utf8PathBuf;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use ghmp_utils::error::RepositoryError;
use ghmp_utils::paths::{absolute, normalize_lexically};

/// Name of the metadata entry searched for in each directory
pub const GIT_ENTRY: &str = ".git";
/// Prefix of the pointer line inside a worktree `.git` file
pub const WORKTREE_MARKER: &str = "gitdir: ";
/// Hooks subdirectory of the metadata directory
pub const HOOKS_DIR: &str = "hooks";

/// Find the metadata directory for `start_dir`.
///
/// Returns an absolute, lexically normalized path. Symlinks are not
/// resolved. A `.git` file without the marker is ignored and the walk
/// continues with the parent directory.
///
/// # Errors
///
/// - [`RepositoryError::NotFound`] when no entry exists up to the root
/// - [`RepositoryError::MetadataReadFailure`] when a `.git` file can't be read
pub fn locate(start_dir: &Path) -> Result<Utf8PathBuf, RepositoryError> {
    let start = normalize_lexically(&absolute(start_dir));
    let mut current = Some(start.as_path());

    while let Some(dir) = current {
        let entry = dir.join(GIT_ENTRY);

        if entry.is_dir() {
            debug!(path = %entry.display(), "Found git metadata directory");
            return to_utf8(entry);
        }

        if entry.is_file() {
            match read_worktree_pointer(&entry, dir)? {
                Some(target) => {
                    debug!(
                        pointer = %entry.display(),
                        path = %target.display(),
                        "Resolved worktree metadata directory"
                    );
                    return to_utf8(target);
                }
                None => {
                    debug!(path = %entry.display(), "Ignoring .git file without gitdir line");
                }
            }
        }

        current = dir.parent();
    }

    Err(RepositoryError::NotFound { start })
}

/// `<metadata>/hooks`, created with all missing parents.
pub fn hooks_directory(start_dir: &Path) -> Result<Utf8PathBuf, RepositoryError> {
    let hooks_dir = locate(start_dir)?.join(HOOKS_DIR);

    fs::create_dir_all(&hooks_dir).map_err(|source| RepositoryError::HooksDirectoryCreate {
        path: hooks_dir.clone().into_std_path_buf(),
        source,
    })?;

    Ok(hooks_dir)
}

/// Read a worktree `.git` file.
///
/// `Ok(None)` when the trimmed content does not start with the marker.
fn read_worktree_pointer(entry: &Path, dir: &Path) -> Result<Option<PathBuf>, RepositoryError> {
    let content =
        fs::read_to_string(entry).map_err(|source| RepositoryError::MetadataReadFailure {
            path: entry.to_path_buf(),
            source,
        })?;

    let Some(target) = content.trim().strip_prefix(WORKTREE_MARKER) else {
        return Ok(None);
    };

    let target = Path::new(target);
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        dir.join(target)
    };

    Ok(Some(normalize_lexically(&resolved)))
}

fn to_utf8(path: PathBuf) -> Result<Utf8PathBuf, RepositoryError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| RepositoryError::NonUtf8Path { path })
}
