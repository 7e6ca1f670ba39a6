use std::path::PathBuf;

use anyhow::{bail, Result};
use codepointe::domain::ports::DeployEvent;
use codepointe::fs::is_project_root;
use codepointe::DeployBatch;

use super::{event_sink, Session};
use crate::ui::context::UiContext;

pub fn cmd_compile(roots: &[PathBuf], ui: UiContext) -> Result<()> {
    let mut compiled = 0usize;
    let mut failed: Vec<PathBuf> = Vec::new();
    let console = event_sink(ui);

    for root in roots {
        if !is_project_root(root) {
            console.on_event(DeployEvent::Warning {
                message: format!("skipping {}: no .sfdx directory", root.display()),
            });
            continue;
        }

        let root = root.canonicalize()?;
        let session = Session::open(Some(&root), ui)?;
        compiled += 1;
        if session
            .pipeline()
            .compile_project(DeployBatch::new(&root))
            .is_err()
        {
            failed.push(root);
        }
    }

    if compiled == 0 {
        bail!("no sfdx project among the given roots");
    }
    if !failed.is_empty() {
        let list: Vec<String> = failed.iter().map(|p| p.display().to_string()).collect();
        bail!("project compile failed for: {}", list.join(", "));
    }
    Ok(())
}
