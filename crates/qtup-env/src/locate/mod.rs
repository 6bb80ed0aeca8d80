//! Locating the installed SDK directory.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use qtup_core::error::QtupError;
use qtup_core::types::version::version_dir;

use crate::EnvResult;

/// Resolve the single installed SDK directory for a version.
///
/// The installer nests one platform-specific directory (the compiler or
/// arch segment) under `<root>/<version-dir>` whose name cannot be
/// predicted in advance. Exactly one directory must match; zero or several
/// matches mean the layout is not a single-release install and the run must
/// stop before exporting anything.
pub fn locate_sdk(install_root: &Utf8Path, version: &str) -> EnvResult<Utf8PathBuf> {
    let pattern = format!("{}/{}/*", install_root, version_dir(version));
    debug!("Locating installed SDK via {}", pattern);

    let entries = glob::glob(&pattern).map_err(|e| QtupError::ConfigValidation {
        field: "dir".to_string(),
        reason: format!("Invalid install path pattern '{}': {}", pattern, e),
    })?;

    let matches: Vec<Utf8PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_dir())
        .filter_map(|path| Utf8PathBuf::from_path_buf(path).ok())
        .collect();

    match matches.as_slice() {
        [single] => Ok(single.clone()),
        _ => Err(QtupError::GlobMismatch {
            pattern,
            matches: matches.len(),
        }),
    }
}
