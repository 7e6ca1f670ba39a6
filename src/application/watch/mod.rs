//! Watch Use Case
//!
//! Continuous file watching with debounced deploys. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Noise filtering (metadata dirs, pipeline output)
//! - One debounce scheduler per project root
//! - Pipelines on background threads, so saves keep accumulating while a
//!   deploy is in flight
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(vec![root]);
//! let use_case = WatchUseCase::new(options, pipeline, events);
//! use_case.start(running)?;
//! ```

mod filter;
mod options;
mod use_case;


pub use filter::{AdmittedChange, ChangeFilter};
pub use options::{WatchOptions, STARTUP_COOLDOWN_MS};
pub use use_case::{WatchSession, WatchUseCase};
