//! Configuration module for CodePointe
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CODEPOINTE_*)
//! 3. Project config (.codepointe/config.toml)
//! 4. User config (~/.config/codepointe/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG};
pub use types::{Config, DeployConfig, OutputConfig};
