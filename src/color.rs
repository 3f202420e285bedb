//! Severity palette (ANSI wrappers via `colored`).

use colored::{Color, Colorize};

/// Color categories used by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warning,
    Notice,
    Error,
    Info,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Debug => Color::Cyan,
            Severity::Warning => Color::Yellow,
            Severity::Notice => Color::Blue,
            Severity::Error => Color::Red,
            Severity::Info => Color::BrightWhite,
        }
    }

    /// Wrap `text` in this severity's color. Errors are also bold.
    pub fn paint(self, text: &str) -> String {
        let colored = text.color(self.color());
        match self {
            Severity::Error => colored.bold().to_string(),
            _ => colored.to_string(),
        }
    }
}

/// Force colors on or off for the whole process, overriding tty and
/// `NO_COLOR` detection.
pub fn set_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
