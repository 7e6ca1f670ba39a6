//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Child processes with streamed output
//! - `hooks` - Hooks file loader with a content-hash cache
//! - `diagnostics` - Per-file diagnostic collection
//! - `events/` - Event sinks (JSON, callback, memory)

pub mod diagnostics;
pub mod events;
pub mod hooks;
pub mod process;

// Re-export for convenience
pub use diagnostics::DiagnosticCollection;
pub use events::{CallbackEventSink, JsonEventSink, MemoryEventSink};
pub use hooks::{FsHookSource, HOOKS_FILE};
pub use process::SystemRunner;
