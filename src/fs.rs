//! Path and content helpers shared by the watcher, hooks and commands

use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};

/// Directory marking an SFDX project root
pub const PROJECT_MARKER: &str = ".sfdx";

/// Whether `dir` contains the project marker directory
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(PROJECT_MARKER).is_dir()
}

/// Nearest ancestor of `path` (itself included) that contains `.sfdx/`
pub fn find_project_root(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|dir| is_project_root(dir))
        .map(Path::to_path_buf)
}

/// `path` relative to `root`, with `/` separators on every platform.
///
/// Returns `None` when `path` is not inside `root` or the result would be
/// empty.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Hex SHA-256 of some content
pub fn content_hash(content: impl AsRef<[u8]>) -> String {
    Sha256::digest(content.as_ref())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn find_project_root_prefers_nearest_marker() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".sfdx")).unwrap();
        std::fs::create_dir_all(root.join("sub/.sfdx")).unwrap();
        std::fs::create_dir_all(root.join("sub/src/classes")).unwrap();

        let start = root.join("sub/src/classes/Foo.cls");
        assert_eq!(find_project_root(&start), Some(root.join("sub")));
    }

    #[test]
    fn find_project_root_ignores_marker_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join(".sfdx"), "").unwrap();

        assert_eq!(find_project_root(&root.join("src/a.cls")), None);
    }

    #[test]
    fn find_project_root_none_without_marker() {
        let dir = tempdir().unwrap();
        assert_eq!(find_project_root(&dir.path().join("src/a.cls")), None);
    }

    #[test]
    fn relative_slash_path_inside_root() {
        let root = Path::new("/work/app");
        assert_eq!(
            relative_slash_path(root, &root.join("src").join("classes").join("Foo.cls")),
            Some("src/classes/Foo.cls".to_string())
        );
    }

    #[test]
    fn relative_slash_path_outside_or_equal_root() {
        let root = Path::new("/work/app");
        assert_eq!(relative_slash_path(root, Path::new("/work/other/a.cls")), None);
        assert_eq!(relative_slash_path(root, root), None);
    }

    #[test]
    fn content_hash_is_stable_hex() {
        let hash = content_hash("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, content_hash(b"abc"));
        assert_ne!(hash, content_hash("abd"));
    }
}
