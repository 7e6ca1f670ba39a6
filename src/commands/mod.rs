//! Command handlers and the wiring they share

pub mod classify;
pub mod compile;
pub mod deploy;
pub mod watch;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use codepointe::application::{DeployPipeline, PipelineSettings};
use codepointe::config::ConfigWarning;
use codepointe::domain::ports::{DeployEvent, DeployEventSink};
use codepointe::infrastructure::{
    CallbackEventSink, DiagnosticCollection, FsHookSource, JsonEventSink, SystemRunner,
};
use codepointe::Config;

use crate::ui::context::UiContext;
use crate::ui::views::watch::render_event;

/// Config of a project plus the UI settings it implies
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    pub events: Arc<dyn DeployEventSink>,
}

impl Session {
    /// Load config for `root` and set up output. Config warnings are
    /// reported through the new event sink.
    pub fn open(root: Option<&Path>, ui: UiContext) -> Result<Self> {
        let (config, warnings) = Config::load_layered(root)?;
        let ui = if config.output.json && !ui.json {
            UiContext {
                json: true,
                color: false,
                ..ui
            }
        } else {
            ui
        };
        let events = event_sink(ui);
        report_warnings(events.as_ref(), &warnings);
        Ok(Self { config, ui, events })
    }

    /// Pipeline wired to real processes, the hooks file and the event sink
    pub fn pipeline(&self) -> DeployPipeline {
        let events = Arc::clone(&self.events);
        DeployPipeline::new(
            Arc::new(SystemRunner::new(events.clone())),
            Arc::new(FsHookSource::new()),
            Arc::new(DiagnosticCollection::publishing(events.clone())),
            events,
        )
        .with_settings(PipelineSettings::from(&self.config.deploy))
    }
}

/// NDJSON on stdout for `--json`, rendered lines on stderr otherwise
pub fn event_sink(ui: UiContext) -> Arc<dyn DeployEventSink> {
    if ui.json {
        return Arc::new(JsonEventSink::stdout());
    }
    Arc::new(CallbackEventSink::new(move |event: DeployEvent| {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(rendered) = render_event(&timestamp, &event, &ui) {
            eprint!("{rendered}");
        }
    }))
}

fn report_warnings(events: &dyn DeployEventSink, warnings: &[ConfigWarning]) {
    for warning in warnings {
        events.on_event(DeployEvent::Warning {
            message: warning.to_string(),
        });
    }
}
