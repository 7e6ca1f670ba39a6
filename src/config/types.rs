//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CodepointeResult;

use super::loader::{self, ConfigWarning};

/// Deploy tooling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Deploy/convert CLI executable
    #[serde(default = "default_cli")]
    pub cli: String,

    /// Zip executable used for resource bundles
    #[serde(default = "default_zip")]
    pub zip: String,

    /// Quiet period after the last save before a batch deploys
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Project-relative scratch directory for `force:mdapi:convert` output
    #[serde(default = "default_convert_dir")]
    pub convert_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            cli: default_cli(),
            zip: default_zip(),
            debounce_ms: default_debounce_ms(),
            convert_dir: default_convert_dir(),
        }
    }
}

fn default_cli() -> String {
    "sfdx".to_string()
}

fn default_zip() -> String {
    "zip".to_string()
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_convert_dir() -> PathBuf {
    PathBuf::from(".codepointe/convert")
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit NDJSON events instead of console lines
    #[serde(default)]
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CodepointeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the first existing of project and user config, with warnings
    pub fn load_layered(project_root: Option<&Path>) -> CodepointeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.deploy.debounce_ms)
    }
}
