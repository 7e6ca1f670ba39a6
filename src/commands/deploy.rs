use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use codepointe::domain::ports::DeployEvent;
use codepointe::fs::{find_project_root, relative_slash_path};
use codepointe::{CodepointeError, DebounceScheduler};

use super::{event_sink, Session};
use crate::ui::context::UiContext;

/// Stage `files` per owning project and flush each project once, skipping
/// the debounce window.
pub fn cmd_deploy(files: &[PathBuf], ui: UiContext) -> Result<()> {
    let console = event_sink(ui);
    let now = Instant::now();
    let mut schedulers: BTreeMap<PathBuf, DebounceScheduler> = BTreeMap::new();

    for file in files {
        let path = absolute(file)?;
        let root = find_project_root(&path).ok_or_else(|| CodepointeError::NotAProject {
            path: path.clone(),
        })?;
        let relative =
            relative_slash_path(&root, &path).ok_or_else(|| CodepointeError::OutsideProject {
                path: path.clone(),
                root: root.clone(),
            })?;

        let scheduler = schedulers
            .entry(root.clone())
            .or_insert_with(|| DebounceScheduler::new(root, Duration::ZERO));
        if !scheduler.on_change(&relative, now) {
            console.on_event(DeployEvent::Warning {
                message: format!("ignoring {relative}: not a deployable file"),
            });
        }
    }

    let mut failed = 0usize;
    let mut flushed = 0usize;
    for (root, mut scheduler) in schedulers {
        let Some(flush) = scheduler.flush_now() else {
            continue;
        };
        flushed += 1;
        let session = Session::open(Some(&root), ui)?;
        if session.pipeline().flush(flush).is_err() {
            failed += 1;
        }
    }

    if flushed == 0 {
        bail!("nothing to deploy");
    }
    if failed > 0 {
        bail!("{failed} of {flushed} deploy(s) failed");
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    Ok(std::env::current_dir()?.join(path))
}
