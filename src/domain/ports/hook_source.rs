//! Hook Source Port
//!
//! Supplies the hook bindings of a project. Implementations must reflect
//! edits to the hooks file without a restart.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::hooks::{HookName, HookSet};

use super::process_runner::ProcessError;

#[derive(Debug, Error)]
pub enum HookError {
    /// Hooks file exists but cannot be read or parsed
    #[error("failed to load hooks from {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Hook command failed
    #[error("hook '{hook}' failed: {source}")]
    Failed {
        hook: HookName,
        #[source]
        source: ProcessError,
    },
}

pub trait HookSource: Send + Sync {
    /// Current hooks of the project at `root`. A missing hooks file is an
    /// empty set, not an error.
    fn load(&self, root: &Path) -> Result<HookSet, HookError>;
}

/// Hook source with no hooks, for one-off runs and tests
pub struct NoHooks;

impl HookSource for NoHooks {
    fn load(&self, _root: &Path) -> Result<HookSet, HookError> {
        Ok(HookSet::new())
    }
}
