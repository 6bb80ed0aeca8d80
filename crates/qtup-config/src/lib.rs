//! Install configuration for the qtup SDK provisioner
//!
//! This crate gathers every install input with its default, validates it,
//! and layers three sources on top of the defaults: an optional qtup.toml
//! file, QTUP_* environment overrides, and CLI flag overrides.

pub mod file;
pub mod install;
pub mod merge;

// Re-export main types
pub use file::{InstallSection, QtupToml};
pub use install::InstallConfig;
pub use merge::{ConfigLoader, ConfigSource};
pub use qtup_core::types::DepsPolicy;

use qtup_core::error::QtupError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, QtupError>;
