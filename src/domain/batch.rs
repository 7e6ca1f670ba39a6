//! Deploy batch entity
//!
//! Everything staged for one deploy cycle. Sets are ordered so the deploy
//! argument and hook payloads are deterministic.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Project-relative directory holding bundle sources
pub const RESOURCE_BUNDLES_DIR: &str = "resource-bundles";

/// Project-relative directory the zipped bundles are written to
pub const STATIC_RESOURCES_DIR: &str = "src/staticresources";

/// Files and bundles staged for a single deploy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployBatch {
    root: PathBuf,
    bundles: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl DeployBatch {
    /// Start an empty batch for a project root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bundles: BTreeSet::new(),
            files: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundles(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty() && self.files.is_empty()
    }

    /// Stage a bundle for zipping. Returns false if it was already staged.
    pub fn add_bundle(&mut self, bundle: impl Into<String>) -> bool {
        self.bundles.insert(bundle.into())
    }

    /// Stage a relative path for deployment. Returns false if it was already staged.
    pub fn add_file(&mut self, relative_path: impl Into<String>) -> bool {
        self.files.insert(relative_path.into())
    }

    /// Stage a bundle together with the archive it produces, so the zipped
    /// resource is part of the deploy.
    pub fn add_bundle_with_archive(&mut self, bundle: &str) {
        self.add_bundle(bundle);
        self.add_file(format!("{STATIC_RESOURCES_DIR}/{bundle}"));
    }

    /// Comma-joined file list, as passed to `force:source:deploy -p`
    pub fn joined_files(&self) -> String {
        self.files().collect::<Vec<_>>().join(",")
    }

    /// Source directory of a bundle
    pub fn bundle_source_dir(&self, bundle: &str) -> PathBuf {
        self.root.join(RESOURCE_BUNDLES_DIR).join(bundle)
    }

    /// Directory the zipped bundles are written to
    pub fn static_resources_dir(&self) -> PathBuf {
        self.root.join(STATIC_RESOURCES_DIR)
    }

    /// Archive path a bundle zips into
    pub fn bundle_archive_path(&self, bundle: &str) -> PathBuf {
        self.static_resources_dir().join(bundle)
    }
}
