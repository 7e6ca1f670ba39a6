//! Watch options

use std::path::PathBuf;
use std::time::Duration;

use crate::application::scheduler::DEBOUNCE_MS;
use crate::config::Config;

/// How long startup notifications are drained before saves count
pub const STARTUP_COOLDOWN_MS: u64 = 500;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Project roots to watch (each must contain `.sfdx/`)
    pub roots: Vec<PathBuf>,
    /// Quiet period before a batch flushes
    pub debounce: Duration,
    /// Project-relative conversion directory, never treated as a save
    pub convert_dir: PathBuf,
    /// Startup period during which watcher notifications are discarded
    pub cooldown: Duration,
}

impl WatchOptions {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let config = Config::default();
        Self {
            roots,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            convert_dir: config.deploy.convert_dir,
            cooldown: Duration::from_millis(STARTUP_COOLDOWN_MS),
        }
    }

    /// Take debounce and conversion directory from config
    pub fn with_config(mut self, config: &Config) -> Self {
        self.debounce = config.debounce();
        self.convert_dir = config.deploy.convert_dir.clone();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}
