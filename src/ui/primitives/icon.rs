use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Watch,
    Deploy,
}

impl Icon {
    /// Unicode and ASCII glyphs for this icon
    fn glyphs(&self) -> (&'static str, &'static str) {
        use theme::{icons as u, icons_ascii as a};
        match self {
            Icon::Success => (u::SUCCESS, a::SUCCESS),
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Progress => (u::PROGRESS, a::PROGRESS),
            Icon::Arrow => (u::ARROW, a::ARROW),
            Icon::Watch => (u::WATCH, a::WATCH),
            Icon::Deploy => (u::DEPLOY, a::DEPLOY),
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Watch | Icon::Deploy => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Deploy.colored(false, false), "[DEPLOY]");
    }
}
