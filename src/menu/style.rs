//! ANSI styling for menu output.

/// ANSI escape codes.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
}

/// Wraps output lines in colors, or passes them through when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Menu title and section headings.
    pub fn heading(&self, text: &str) -> String {
        self.paint(&format!("{}{}", colors::BOLD, colors::CYAN), text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(colors::GREEN, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(colors::YELLOW, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(colors::BRIGHT_RED, text)
    }

    /// Freshly generated passwords.
    pub fn secret(&self, text: &str) -> String {
        self.paint(colors::BOLD, text)
    }

    fn paint(&self, codes: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", codes, text, colors::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(true)
    }
}
