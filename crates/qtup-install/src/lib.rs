//! External collaborators for the qtup SDK provisioner
//!
//! This crate wraps every process qtup shells out to: the aqt installer CLI,
//! the Python/pip bootstrap, and the OS package manager for native build
//! prerequisites. Execution is strictly sequential and fail-fast; there are
//! no retries and no timeouts, and a non-zero exit anywhere aborts the run.

pub mod aqt;
pub mod bootstrap;
pub mod runner;
pub mod sysdeps;

// Re-export main types
pub use aqt::AqtRunner;
pub use bootstrap::Bootstrapper;
pub use runner::{CommandOutput, CommandRunner};
pub use sysdeps::SystemDeps;

use qtup_core::error::QtupError;

/// Result type for installer operations
pub type InstallResult<T> = Result<T, QtupError>;
