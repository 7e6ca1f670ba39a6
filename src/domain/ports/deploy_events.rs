//! Deploy Event Port
//!
//! The process-wide append-only log. Command output, progress, outcomes and
//! watch lifecycle all flow through one sink so the console and NDJSON
//! renderings stay in step.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::diagnostics::Diagnostic;

/// Which pipeline a flush runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushKind {
    /// Zip staged bundles and deploy staged files
    Deploy,
    /// Convert and deploy the whole project
    CompileProject,
}

/// Event emitted while watching and deploying
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeployEvent {
    /// Watching a project root
    WatchStarted { root: PathBuf },

    /// A relevant file was saved
    FileChanged { path: String },

    /// A batch left the debounce window
    FlushStarted { root: PathBuf, kind: FlushKind },

    /// A line of external command output or a log message
    Output { line: String },

    /// Long-running step started (the deploy CLI call)
    ProgressStarted { title: String },

    /// Long-running step finished
    ProgressFinished { title: String, success: bool },

    /// Pipeline finished successfully
    Completed { root: PathBuf, kind: FlushKind },

    /// Pipeline failed; `message` is the user-facing summary
    Failed {
        root: PathBuf,
        kind: FlushKind,
        message: String,
    },

    /// Every diagnostic under a project root was dropped
    DiagnosticsCleared { root: PathBuf },

    /// Diagnostics replaced for one file
    DiagnosticsPublished {
        file: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },

    /// Non-fatal problem (config warnings, unparseable failure payloads)
    Warning { message: String },

    /// Watch loop stopped
    Shutdown,
}

impl DeployEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving deploy events
pub trait DeployEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: DeployEvent);

    /// Append one line to the log
    fn log(&self, line: &str) {
        self.on_event(DeployEvent::Output {
            line: line.to_string(),
        });
    }
}
