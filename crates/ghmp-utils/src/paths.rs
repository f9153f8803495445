use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` directly under the root is dropped (the root is its own parent).
/// Leading `..` components of a relative path are kept.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalized.push("..");
                }
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Absolute form of `path`, relative paths being joined to the current
/// directory. Falls back to the path as given when the current directory is
/// unavailable.
#[must_use]
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path for embedding in a POSIX shell command line.
///
/// The path is made absolute, backslashes become forward slashes, and the
/// result is wrapped in double quotes.
///
/// ```rust
/// use ghmp_utils::paths::shell_quoted_path;
/// use std::path::Path;
///
/// assert_eq!(shell_quoted_path(Path::new("/repo/pom.xml")), "\"/repo/pom.xml\"");
/// ```
#[must_use]
pub fn shell_quoted_path(path: &Path) -> String {
    let absolute = absolute(path);
    format!("\"{}\"", unixify(&absolute.to_string_lossy()))
}

/// Replace Windows path separators with forward slashes.
#[must_use]
pub fn unixify(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_cur_and_parent_components() {
        assert_eq!(
            normalize_lexically(Path::new("/work/a/b/../../other/.git/./worktrees/feature")),
            PathBuf::from("/work/other/.git/worktrees/feature")
        );
    }

    #[test]
    fn test_normalize_parent_of_root_stays_root() {
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(
            normalize_lexically(Path::new("../../repo/./.git")),
            PathBuf::from("../../repo/.git")
        );
        assert_eq!(normalize_lexically(Path::new("a/..")), PathBuf::new());
    }

    #[test]
    fn test_unixify_replaces_backslashes() {
        assert_eq!(unixify(r"C:\work\repo\pom.xml"), "C:/work/repo/pom.xml");
        assert_eq!(unixify("/already/unix"), "/already/unix");
    }

    #[test]
    fn test_shell_quoted_path_is_absolute() {
        let rendered = shell_quoted_path(Path::new("pom.xml"));
        assert!(rendered.starts_with('"'));
        assert!(rendered.ends_with("pom.xml\""));
        let inner = rendered.trim_matches('"');
        assert!(absolute(Path::new(inner)).is_absolute());
        assert!(!inner.contains('\\'));
    }

    proptest::proptest! {
        #[test]
        fn prop_normalize_is_idempotent(parts in proptest::collection::vec("(\\.|\\.\\.|[a-z]{1,4})", 0..8)) {
            let path = PathBuf::from(format!("/{}", parts.join("/")));
            let once = normalize_lexically(&path);
            proptest::prop_assert_eq!(normalize_lexically(&once), once.clone());
            proptest::prop_assert!(once.components().all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
        }
    }
}
