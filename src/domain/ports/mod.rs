//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod diagnostic_sink;
pub mod hook_source;
pub mod process_runner;

pub use deploy_events::{DeployEvent, DeployEventSink, FlushKind};
pub use diagnostic_sink::DiagnosticSink;
pub use hook_source::{HookError, HookSource, NoHooks};
pub use process_runner::{ProcessError, ProcessRunner, RunOptions};
