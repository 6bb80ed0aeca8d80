//! Version and architecture resolution for qtup
//!
//! This crate turns a loose version specifier into an exact release (via the
//! external installer's list query), picks the default architecture for a
//! host when the user supplied none, and assembles the positional argument
//! vector the installer is invoked with.

pub mod arch;
pub mod args;
pub mod version;

// Re-export main types
pub use arch::default_arch;
pub use args::build_install_args;
pub use version::{ListQuery, Resolver, LATEST_LTS};

use qtup_core::error::QtupError;

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, QtupError>;
