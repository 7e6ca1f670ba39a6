use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            verbose,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
        }
    }

    #[test]
    fn color_enabled_on_interactive_terminal() {
        let ui = UiContext::from_caps(false, 0, tty_caps());
        assert!(ui.color);
        assert!(ui.unicode);
    }

    #[test]
    fn ci_disables_color() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        assert!(!UiContext::from_caps(false, 0, caps).color);
    }

    #[test]
    fn json_disables_color() {
        assert!(!UiContext::from_caps(true, 0, tty_caps()).color);
    }
}
