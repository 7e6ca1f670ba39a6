//! Change filter
//!
//! Decides whether a watcher notification is a real save of a relevant
//! project file. Editors and the pipeline itself produce a lot of noise:
//! metadata directories, the conversion scratch directory and zipped bundles
//! written back into `src/staticresources`. Every save of a relevant file is
//! admitted, even with unchanged bytes, since re-saving is how a failed
//! deploy gets retried.

use std::path::{Component, Path};

use crate::domain::batch::{RESOURCE_BUNDLES_DIR, STATIC_RESOURCES_DIR};
use crate::domain::classifier::{classify, Classification};
use crate::fs::relative_slash_path;

/// Top-level directories that never hold deployable sources
const SKIPPED_DIRS: &[&str] = &[".sfdx", ".git", ".codepointe"];

/// A save that should be staged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmittedChange {
    /// Project-relative path with `/` separators
    pub relative_path: String,
    pub classification: Classification,
}

/// Filters watcher notifications down to saves of relevant files
#[derive(Debug, Default)]
pub struct ChangeFilter {
    convert_dir: String,
}

impl ChangeFilter {
    pub fn new(convert_dir: &Path) -> Self {
        let convert_dir = convert_dir
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Self { convert_dir }
    }

    /// Filter a notification for `path` inside the project at `root`
    pub fn admit(&self, root: &Path, path: &Path) -> Option<AdmittedChange> {
        let relative_path = relative_slash_path(root, path)?;
        if self.is_noise(root, &relative_path) {
            return None;
        }

        let classification = classify(&relative_path);
        if !classification.is_relevant() {
            return None;
        }

        // Deleted files and directories are not saves.
        if !path.is_file() {
            return None;
        }

        Some(AdmittedChange {
            relative_path,
            classification,
        })
    }

    fn is_noise(&self, root: &Path, relative_path: &str) -> bool {
        let first = relative_path.split('/').next().unwrap_or_default();
        if SKIPPED_DIRS.contains(&first) {
            return true;
        }

        if !self.convert_dir.is_empty() && is_within(relative_path, &self.convert_dir) {
            return true;
        }

        // src/staticresources/<bundle> is the zip output of resource-bundles/<bundle>
        if let Some(rest) = relative_path
            .strip_prefix(STATIC_RESOURCES_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            let generated = rest.split('/').next().unwrap_or_default();
            if !generated.is_empty() && root.join(RESOURCE_BUNDLES_DIR).join(generated).is_dir() {
                return true;
            }
        }

        false
    }
}

fn is_within(relative_path: &str, dir: &str) -> bool {
    relative_path == dir
        || relative_path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
}
