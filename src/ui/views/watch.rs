use std::path::Path;

use codepointe::domain::ports::{DeployEvent, FlushKind};
use codepointe::Diagnostic;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(roots: &[String], ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "CodePointe Watch");
    for root in roots {
        header.add("Root", root.as_str());
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(ui.color, ui.unicode)
}

/// Console rendering of one event, `None` for events the console skips
pub fn render_event(timestamp: &str, event: &DeployEvent, ui: &UiContext) -> Option<String> {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(ui.color);
    let icon = |icon: Icon| icon.colored(ui.color, ui.unicode);

    let rendered = match event {
        DeployEvent::WatchStarted { root } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), root.display())
        }
        DeployEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        DeployEvent::FlushStarted { root, kind } => {
            if ui.verbose == 0 {
                return None;
            }
            let what = match kind {
                FlushKind::Deploy => "Deploy",
                FlushKind::CompileProject => "Project compile",
            };
            format!("{} {} {} in {}\n", prefix, icon(Icon::Deploy), what, root.display())
        }
        DeployEvent::Output { line } => format!("{} {}\n", prefix, line),
        DeployEvent::ProgressStarted { title } => {
            format!("{} {} {}...\n", prefix, icon(Icon::Progress), title)
        }
        DeployEvent::ProgressFinished { title, success } => {
            let status = if *success { Icon::Success } else { Icon::Error };
            format!("{} {} {}\n", prefix, icon(status), title)
        }
        DeployEvent::Completed { .. } => return None,
        DeployEvent::Failed { message, .. } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Error),
            ColoredText::error(format!("Error: {message}")).render(ui.color)
        ),
        DeployEvent::DiagnosticsCleared { root } => {
            format!("{} {} Diagnostics cleared: {}\n", prefix, icon(Icon::Arrow), root.display())
        }
        DeployEvent::DiagnosticsPublished { file, diagnostics } => {
            render_diagnostics(file, diagnostics, ui)
        }
        DeployEvent::Warning { message } => {
            format!("{} {} {}\n", prefix, icon(Icon::Warning), message)
        }
        DeployEvent::Shutdown => {
            format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch))
        }
    };
    Some(rendered)
}

/// `file:line:column: message`, positions shown 1-based like compilers do
pub fn render_diagnostics(file: &Path, diagnostics: &[Diagnostic], ui: &UiContext) -> String {
    diagnostics
        .iter()
        .map(|d| {
            format!(
                "  {}:{}:{}: {}\n",
                file.display(),
                d.line + 1,
                d.column + 1,
                ColoredText::error(d.message.as_str()).render(ui.color)
            )
        })
        .collect()
}
