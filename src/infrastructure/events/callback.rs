//! Callback Event Sink
//!
//! Forwards events to a closure; the CLI uses it to render console output.

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct CallbackEventSink<F>
where
    F: Fn(DeployEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackEventSink<F>
where
    F: Fn(DeployEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DeployEventSink for CallbackEventSink<F>
where
    F: Fn(DeployEvent) + Send + Sync,
{
    fn on_event(&self, event: DeployEvent) {
        (self.callback)(event)
    }
}
