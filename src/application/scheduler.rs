//! Debounce scheduler
//!
//! Trailing-edge debounce over file saves for one project root. The first
//! relevant save opens a batch and arms a deadline; every further relevant
//! save stages its path and pushes the deadline out again. Once the deadline
//! passes with no new saves, `poll` hands the batch over and the scheduler is
//! idle again, even if the handed-over batch is still deploying.
//!
//! Time is passed in explicitly so the state machine is deterministic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::domain::batch::DeployBatch;
use crate::domain::classifier::{classify, Classification, FileKind};
use crate::domain::ports::FlushKind;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// A batch leaving the debounce window, tagged with the pipeline to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flush {
    Deploy(DeployBatch),
    CompileProject(DeployBatch),
}

impl Flush {
    pub fn kind(&self) -> FlushKind {
        match self {
            Flush::Deploy(_) => FlushKind::Deploy,
            Flush::CompileProject(_) => FlushKind::CompileProject,
        }
    }

    pub fn batch(&self) -> &DeployBatch {
        match self {
            Flush::Deploy(batch) | Flush::CompileProject(batch) => batch,
        }
    }
}

/// Accumulates saves for one project root
#[derive(Debug)]
pub struct DebounceScheduler {
    root: PathBuf,
    delay: Duration,
    pending: Option<DeployBatch>,
    full_compile: bool,
    deadline: Option<Instant>,
}

impl DebounceScheduler {
    pub fn new(root: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            root: root.into(),
            delay,
            pending: None,
            full_compile: false,
            deadline: None,
        }
    }

    /// Scheduler with the default 100ms window
    pub fn with_default_delay(root: impl Into<PathBuf>) -> Self {
        Self::new(root, Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// No batch is accumulating
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// The cycle will run a project compile
    pub fn is_full_compile(&self) -> bool {
        self.full_compile
    }

    /// When the pending batch flushes if nothing else arrives
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Classify a saved project-relative path and stage it.
    /// Returns whether the save was relevant.
    pub fn on_change(&mut self, relative_path: &str, now: Instant) -> bool {
        let classification = classify(relative_path);
        self.stage(relative_path, &classification, now)
    }

    /// Stage an already classified path. Ignored paths leave the state and
    /// the deadline untouched.
    pub fn stage(&mut self, relative_path: &str, classification: &Classification, now: Instant) -> bool {
        if !classification.is_relevant() {
            return false;
        }

        if classification.full_compile || self.full_compile {
            // Sticky until the next flush; the whole tree deploys, so the
            // staged paths no longer matter.
            self.full_compile = true;
            self.pending = Some(DeployBatch::new(self.root.clone()));
        } else {
            let batch = self
                .pending
                .get_or_insert_with(|| DeployBatch::new(self.root.clone()));
            match &classification.kind {
                FileKind::Deployable => {
                    batch.add_file(relative_path);
                }
                FileKind::BundleMember { bundle } => batch.add_bundle_with_archive(bundle),
                FileKind::Ignored => {}
            }
        }

        self.deadline = Some(now + self.delay);
        true
    }

    /// Hand over the pending batch once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<Flush> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush_now(),
            _ => None,
        }
    }

    /// Hand over the pending batch regardless of the deadline
    pub fn flush_now(&mut self) -> Option<Flush> {
        self.deadline = None;
        let batch = self.pending.take()?;
        let flush = if std::mem::take(&mut self.full_compile) {
            Flush::CompileProject(batch)
        } else {
            Flush::Deploy(batch)
        };
        Some(flush)
    }
}
