//! Error message formatting with actionable suggestions.
//!
//! Provides the single report-and-stop rendering used at the top level:
//! the error itself, a suggestion when one exists, and the source chain.

use std::error::Error;

use qtup_core::error::QtupError;

use super::colors::ColorSupport;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &QtupError) -> String {
        let mut output = String::new();

        // Main error message
        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        // Add suggestion if available
        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        // Add source chain if available
        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_includes_suggestion() {
        let error = QtupError::Resolution {
            spec: "99.99".to_string(),
            host: "linux".to_string(),
            target: "desktop".to_string(),
            reason: "lookup returned no matching release".to_string(),
        };

        let formatter = ErrorFormatter::new();
        let rendered = formatter.format_error(&error);
        assert!(rendered.contains("99.99"));
        assert!(rendered.contains("help"));
        assert!(rendered.contains("list-qt"));
    }

    #[test]
    fn test_source_chain_is_rendered() {
        let error = QtupError::io(
            "Failed to read qtup.toml".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );

        let formatter = ErrorFormatter::new();
        let rendered = formatter.format_error(&error);
        assert!(rendered.contains("caused by"));
        assert!(rendered.contains("no such file"));
    }
}
