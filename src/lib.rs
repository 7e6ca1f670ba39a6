//! CodePointe - save-triggered deploys for SFDX projects
//!
//! Watches source trees, batches saves behind a short debounce, zips
//! static resource bundles and pushes the result through the `sfdx` CLI.
//! Deploy failures come back as per-file diagnostics.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DebounceScheduler, DeployPipeline, Flush, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::{classify, parse_deploy_failure, Classification, DeployBatch, Diagnostic, FileKind};
pub use error::{CodepointeError, CodepointeResult};
