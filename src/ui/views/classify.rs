use codepointe::{Classification, FileKind};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_classification(path: &str, classification: &Classification, ui: &UiContext) -> String {
    let (icon, label) = match &classification.kind {
        FileKind::Deployable => (Icon::Success, "deployable".to_string()),
        FileKind::BundleMember { bundle } => (Icon::Deploy, format!("bundle member of {bundle}")),
        FileKind::Ignored if classification.full_compile => (Icon::Warning, "metadata".to_string()),
        FileKind::Ignored => (Icon::Arrow, ColoredText::dim("ignored").render(ui.color)),
    };

    let mut out = format!("{} {}: {}", icon.colored(ui.color, ui.unicode), path, label);
    if classification.full_compile {
        out.push_str(&format!(
            " ({})",
            ColoredText::warning("triggers project compile").render(ui.color)
        ));
    }
    out.push('\n');
    out
}
