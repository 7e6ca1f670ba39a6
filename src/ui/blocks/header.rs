use std::fmt::Write;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line followed by aligned `label: value` rows
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    rows: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push((label, value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = self.icon.colored(supports_color, supports_unicode);
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut out = format!("{icon} {title}\n");
        for (label, value) in &self.rows {
            let _ = writeln!(out, "{label:>width$}: {value}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Watch, "CodePointe Watch");
        header.add("Root", "/work/app");

        let rendered = header.render(false, false);
        assert_eq!(rendered, "[~] CodePointe Watch\nRoot: /work/app\n");
    }

    #[test]
    fn labels_are_right_aligned() {
        let mut header = CommandHeader::new(Icon::Watch, "CodePointe Watch");
        header.add("Root", "/work/app");
        header.add("Debounce", "100ms");

        let rendered = header.render(false, false);
        assert_eq!(
            rendered,
            "[~] CodePointe Watch\n    Root: /work/app\nDebounce: 100ms\n"
        );
    }
}
