//! In-memory event sink that records every event

use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<DeployEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<DeployEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Logged output lines only
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DeployEvent::Output { line } => Some(line),
                _ => None,
            })
            .collect()
    }
}

impl DeployEventSink for MemoryEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
