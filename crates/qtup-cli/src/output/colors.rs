//! Terminal color support detection and formatting.
//!
//! Color use respects the NO_COLOR environment variable and is disabled
//! whenever output is not going to a terminal, which is the common case on
//! CI runners.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self {
            enabled: Self::should_use_colors(),
        }
    }

    /// Force enable colors
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors should be used
    fn should_use_colors() -> bool {
        // Respect NO_COLOR environment variable
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        io::stderr().is_terminal() && io::stdout().is_terminal()
    }

    /// Format text in green
    pub fn green(&self, text: &str) -> String {
        self.wrap("\x1b[32m", text)
    }

    /// Format text in yellow
    pub fn yellow(&self, text: &str) -> String {
        self.wrap("\x1b[33m", text)
    }

    /// Format text in red
    pub fn red(&self, text: &str) -> String {
        self.wrap("\x1b[31m", text)
    }

    /// Format text as dim/gray
    pub fn dim(&self, text: &str) -> String {
        self.wrap("\x1b[2m", text)
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_passes_text_through() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.green("done"), "done");
        assert_eq!(colors.red("failed"), "failed");
    }

    #[test]
    fn test_enabled_wraps_with_reset() {
        let colors = ColorSupport::enabled();
        assert_eq!(colors.yellow("careful"), "\x1b[33mcareful\x1b[0m");
        assert!(colors.dim("note").ends_with("\x1b[0m"));
    }
}
