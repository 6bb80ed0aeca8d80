//! Environment projection for installed SDKs
//!
//! This crate turns an installed SDK layout into the environment the rest
//! of a CI job builds against. Decision logic is pure: it computes an
//! ordered list of mutations, and only the boundary applier ever touches
//! the process or runner environment. If anything upstream fails, no
//! mutation is emitted at all.

pub mod apply;
pub mod locate;
pub mod project;

// Re-export main types
pub use apply::{EnvApplier, EnvSink};
pub use locate::locate_sdk;
pub use project::compute_mutations;

use camino::Utf8Path;

use qtup_core::error::QtupError;
use qtup_core::types::{EnvMutation, HostOs};

/// Result type for environment operations
pub type EnvResult<T> = Result<T, QtupError>;

/// Locate the installed SDK and compute the full mutation list for it
pub fn project_environment(
    install_root: &Utf8Path,
    version: &str,
    host: HostOs,
    tools_requested: bool,
) -> EnvResult<Vec<EnvMutation>> {
    let sdk_path = locate_sdk(install_root, version)?;
    compute_mutations(install_root, &sdk_path, version, host, tools_requested)
}
