//! Error types and result aliases for qtup operations.
//!
//! Provides a unified error type that covers all error conditions across the
//! qtup pipeline with actionable error messages.

use thiserror::Error;

/// Unified error type for all qtup operations
#[derive(Error, Debug)]
pub enum QtupError {
    // Config errors
    #[error("Failed to parse qtup.toml: {message}")]
    TomlParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // Version errors
    #[error("Invalid version '{input}': {reason}")]
    Version { input: String, reason: String },

    // Resolution errors
    #[error("No release matches '{spec}' for {host}/{target}: {reason}")]
    Resolution {
        spec: String,
        host: String,
        target: String,
        reason: String,
    },

    // Installer errors
    #[error("Failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with status {}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    InstallerExit { command: String, code: Option<i32> },

    #[error("Tool installation failed for: {}", .failed.join(", "))]
    ToolsFailed { failed: Vec<String> },

    #[error("Bootstrap of {component} failed: {reason}")]
    Bootstrap { component: String, reason: String },

    // Environment projection errors
    #[error("Expected exactly one installed directory under '{pattern}', found {matches}")]
    GlobMismatch { pattern: String, matches: usize },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for qtup operations
pub type QtupResult<T> = Result<T, QtupError>;

impl QtupError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            QtupError::Resolution { .. } => {
                Some("Check the version specifier against 'aqt list-qt <host> <target>'")
            },
            QtupError::Spawn { .. } => {
                Some("Ensure aqtinstall is on PATH (pip install aqtinstall) or rerun with --setup-python true")
            },
            QtupError::GlobMismatch { .. } => {
                Some("The install directory does not look like a single-release aqt layout; check --dir")
            },
            QtupError::ToolsFailed { .. } => {
                Some("Tool names are 'name[,variant]'; list valid variants with 'aqt list-tool'")
            },
            QtupError::Bootstrap { .. } => {
                Some("Install Python 3.6+ and pip, or pass --setup-python false to manage them yourself")
            },
            _ => None,
        }
    }
}
