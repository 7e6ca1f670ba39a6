use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use codepointe::{WatchOptions, WatchUseCase};

use super::Session;
use crate::ui::context::UiContext;
use crate::ui::views::watch::render_watch_header;

/// Settings and config come from the first root.
pub fn cmd_watch(roots: &[PathBuf], debounce_ms: Option<u64>, ui: UiContext) -> Result<()> {
    let session = Session::open(roots.first().map(PathBuf::as_path), ui)?;

    let mut options = WatchOptions::new(roots.to_vec()).with_config(&session.config);
    if let Some(ms) = debounce_ms {
        options = options.with_debounce(Duration::from_millis(ms));
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !session.ui.json {
        let labels: Vec<String> = roots.iter().map(|r| r.display().to_string()).collect();
        eprint!("{}", render_watch_header(&labels, &session.ui));
    }

    let use_case = WatchUseCase::new(options, Arc::new(session.pipeline()), session.events.clone());
    use_case.start(running)?;

    Ok(())
}
