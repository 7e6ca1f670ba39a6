//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::pipeline::DeployPipeline;
use crate::application::scheduler::{DebounceScheduler, Flush};
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::error::{CodepointeError, CodepointeResult};
use crate::fs::{find_project_root, is_project_root};

use super::filter::ChangeFilter;
use super::options::WatchOptions;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Per-root debounce state fed by watcher notifications.
///
/// Kept separate from the notify plumbing so it can be driven with explicit
/// time.
#[derive(Debug)]
pub struct WatchSession {
    debounce: Duration,
    filter: ChangeFilter,
    schedulers: HashMap<PathBuf, DebounceScheduler>,
}

impl WatchSession {
    pub fn new(options: &WatchOptions) -> Self {
        Self {
            debounce: options.debounce,
            filter: ChangeFilter::new(&options.convert_dir),
            schedulers: HashMap::new(),
        }
    }

    /// Stage a changed absolute path into the scheduler of its owning root.
    /// Returns the project-relative path when the save was staged.
    pub fn on_path(&mut self, path: &Path, now: Instant) -> Option<String> {
        let root = find_project_root(path)?;
        let change = self.filter.admit(&root, path)?;

        let debounce = self.debounce;
        let scheduler = self
            .schedulers
            .entry(root.clone())
            .or_insert_with(|| DebounceScheduler::new(root, debounce));

        scheduler
            .stage(&change.relative_path, &change.classification, now)
            .then_some(change.relative_path)
    }

    /// Batches whose quiet period has passed
    pub fn due(&mut self, now: Instant) -> Vec<Flush> {
        self.schedulers
            .values_mut()
            .filter_map(|scheduler| scheduler.poll(now))
            .collect()
    }

    /// No root has a batch accumulating
    pub fn is_idle(&self) -> bool {
        self.schedulers.values().all(DebounceScheduler::is_idle)
    }
}

/// Watch Use Case
///
/// Orchestrates continuous file watching with debounced deploys.
/// This is the main entry point for the `codepointe watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
    pipeline: Arc<DeployPipeline>,
    events: Arc<dyn DeployEventSink>,
}

impl WatchUseCase {
    pub fn new(
        options: WatchOptions,
        pipeline: Arc<DeployPipeline>,
        events: Arc<dyn DeployEventSink>,
    ) -> Self {
        Self {
            options,
            pipeline,
            events,
        }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until the running flag is set to false, then waits for
    /// in-flight pipelines. A batch still inside its quiet period is dropped.
    pub fn start(&self, running: Arc<AtomicBool>) -> CodepointeResult<()> {
        let roots = self.resolve_roots()?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        for root in &roots {
            watcher.watch(root, RecursiveMode::Recursive)?;
            self.events
                .on_event(DeployEvent::WatchStarted { root: root.clone() });
        }

        // notify sometimes reports existing files right after registration
        let cooldown_end = Instant::now() + self.options.cooldown;
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(POLL_INTERVAL);
        }

        let mut session = WatchSession::new(&self.options);
        let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(POLL_INTERVAL) {
                if let Some(relative_path) = session.on_path(&path, Instant::now()) {
                    self.events
                        .on_event(DeployEvent::FileChanged { path: relative_path });
                }
            }

            for flush in session.due(Instant::now()) {
                in_flight.push(self.spawn_flush(flush));
            }
            in_flight.retain(|handle| !handle.is_finished());
        }

        drop(watcher);
        for handle in in_flight {
            let _ = handle.join();
        }

        self.events.on_event(DeployEvent::Shutdown);
        Ok(())
    }

    fn resolve_roots(&self) -> CodepointeResult<Vec<PathBuf>> {
        self.options
            .roots
            .iter()
            .map(|root| {
                if !is_project_root(root) {
                    return Err(CodepointeError::NotAProject { path: root.clone() });
                }
                Ok(root.canonicalize()?)
            })
            .collect()
    }

    fn spawn_flush(&self, flush: Flush) -> JoinHandle<()> {
        let pipeline = Arc::clone(&self.pipeline);
        std::thread::spawn(move || {
            // Failures are reported through the event sink by the pipeline
            let _ = pipeline.flush(flush);
        })
    }
}
