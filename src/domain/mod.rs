//! Domain Layer
//!
//! Pure types and rules with no I/O: path classification, the deploy batch,
//! failure-payload translation and hook bindings. Ports describe what the
//! domain needs from the outside world.

pub mod batch;
pub mod classifier;
pub mod diagnostics;
pub mod hooks;
pub mod ports;

pub use batch::DeployBatch;
pub use classifier::{classify, Classification, FileKind};
pub use diagnostics::{group_by_file, parse_deploy_failure, Diagnostic};
pub use hooks::{HookCommand, HookName, HookSet};
