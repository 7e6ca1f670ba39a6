//! Hooks file loader
//!
//! Reads `<root>/.codepointe/hooks.toml` on every lookup so edits apply
//! immediately, and reuses the parsed bindings while the content hash is
//! unchanged.

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;

use crate::domain::hooks::{HookCommand, HookName, HookSet};
use crate::domain::ports::{HookError, HookSource};
use crate::fs::content_hash;

/// Project-relative location of the hooks file
pub const HOOKS_FILE: &str = ".codepointe/hooks.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HooksFile {
    #[serde(default)]
    hooks: BTreeMap<String, HookCommand>,
}

struct CachedHooks {
    hash: String,
    hooks: HookSet,
}

/// Hook source reading TOML hook files from disk
#[derive(Default)]
pub struct FsHookSource {
    cache: Mutex<HashMap<PathBuf, CachedHooks>>,
}

impl FsHookSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached bindings for a root
    fn invalidate(&self, root: &Path) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.remove(root);
        }
    }

    fn parse(path: &Path, content: &str) -> Result<HookSet, HookError> {
        let load_error = |message: String| HookError::Load {
            path: path.to_path_buf(),
            message,
        };

        let file: HooksFile = toml::from_str(content).map_err(|e| load_error(e.to_string()))?;

        file.hooks
            .into_iter()
            .map(|(key, command)| {
                let name = key.parse::<HookName>().map_err(load_error)?;
                Ok((name, command))
            })
            .collect()
    }
}

impl HookSource for FsHookSource {
    fn load(&self, root: &Path) -> Result<HookSet, HookError> {
        let path = root.join(HOOKS_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.invalidate(root);
                return Ok(HookSet::new());
            }
            Err(e) => {
                return Err(HookError::Load {
                    path,
                    message: e.to_string(),
                })
            }
        };

        let hash = content_hash(&content);

        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.get(root) {
                if cached.hash == hash {
                    return Ok(cached.hooks.clone());
                }
            }
        }

        let hooks = Self::parse(&path, &content)?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                root.to_path_buf(),
                CachedHooks {
                    hash,
                    hooks: hooks.clone(),
                },
            );
        }

        Ok(hooks)
    }
}
