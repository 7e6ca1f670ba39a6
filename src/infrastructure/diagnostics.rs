//! Diagnostic collection
//!
//! Holds the current problems per file and announces every replacement on
//! the event sink, where the console renders them as `file:line:col` lines
//! and `--json` consumers receive them as `diagnostics_published` events.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::diagnostics::Diagnostic;
use crate::domain::ports::{DeployEvent, DeployEventSink, DiagnosticSink};

pub struct DiagnosticCollection {
    entries: Mutex<BTreeMap<PathBuf, Vec<Diagnostic>>>,
    events: Option<Arc<dyn DeployEventSink>>,
}

impl DiagnosticCollection {
    /// Collection that only stores
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            events: None,
        }
    }

    /// Collection that also publishes to an event sink
    pub fn publishing(events: Arc<dyn DeployEventSink>) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            events: Some(events),
        }
    }

    /// Diagnostics currently held for a file
    pub fn get(&self, file: &Path) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(file).cloned())
            .unwrap_or_default()
    }

    /// Files that currently have diagnostics
    pub fn files(&self) -> Vec<PathBuf> {
        self.entries
            .lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.is_empty())
            .unwrap_or(true)
    }
}

impl Default for DiagnosticCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn clear(&self, root: &Path) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|file, _| !file.starts_with(root));
        }
        if let Some(events) = &self.events {
            events.on_event(DeployEvent::DiagnosticsCleared {
                root: root.to_path_buf(),
            });
        }
    }

    fn set(&self, file: &Path, diagnostics: Vec<Diagnostic>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(file.to_path_buf(), diagnostics.clone());
        }
        if let Some(events) = &self.events {
            events.on_event(DeployEvent::DiagnosticsPublished {
                file: file.to_path_buf(),
                diagnostics,
            });
        }
    }
}
