//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for editors and CI
//! - CallbackEventSink: hands events to a closure (console rendering)
//! - MemoryEventSink: records events for inspection

mod callback;
mod json;
mod memory;

pub use callback::CallbackEventSink;
pub use json::JsonEventSink;
pub use memory::MemoryEventSink;
