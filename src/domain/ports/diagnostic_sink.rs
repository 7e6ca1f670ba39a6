//! Diagnostic Sink Port
//!
//! Where translated deploy problems are published. Each `set` replaces the
//! previous set for that file; `clear` drops the sets of one project root.

use std::path::Path;

use crate::domain::diagnostics::Diagnostic;

pub trait DiagnosticSink: Send + Sync {
    /// Drop the diagnostics of every file under `root`
    fn clear(&self, root: &Path);

    /// Replace the diagnostics for one absolute file path
    fn set(&self, file: &Path, diagnostics: Vec<Diagnostic>);
}
