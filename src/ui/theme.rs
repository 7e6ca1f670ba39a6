//! Console colors and glyphs. Views take every color and icon from here.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    /// Warnings and in-flight steps
    pub const WARNING: Color = Color::Yellow;
    /// Titles and command icons
    pub const INFO: Color = Color::Cyan;
    /// Timestamps and secondary text
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const WATCH: &str = "⟳";
    pub const DEPLOY: &str = "⇪";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const WATCH: &str = "[~]";
    pub const DEPLOY: &str = "[DEPLOY]";
}
