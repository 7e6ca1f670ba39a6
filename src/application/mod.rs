//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (batch, classifier, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DebounceScheduler` - Accumulates saves per project root
//! - `DeployPipeline` - Zips, converts and deploys a batch
//! - `WatchUseCase` - Feeds watcher notifications into schedulers

pub mod pipeline;
pub mod scheduler;
pub mod watch;

pub use pipeline::{discover_bundles, DeployPipeline, PipelineError, PipelineSettings};
pub use scheduler::{DebounceScheduler, Flush, DEBOUNCE_MS};
pub use watch::{ChangeFilter, WatchOptions, WatchSession, WatchUseCase};
