//! Install request type handed to the external installer.

use crate::types::platform::PlatformTriple;

/// Everything the installer invocation is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Host, target, and (optional) architecture
    pub triple: PlatformTriple,
    /// Exact resolved version to install
    pub version: String,
    /// Extra SDK modules, in input order
    pub modules: Vec<String>,
    /// Verbatim passthrough arguments, appended last
    pub extra_args: Vec<String>,
    /// Skip the SDK itself and install only the requested tools
    pub tools_only: bool,
}

impl InstallRequest {
    /// Create a request with no modules or extra arguments
    pub fn new(triple: PlatformTriple, version: impl Into<String>) -> Self {
        Self {
            triple,
            version: version.into(),
            modules: Vec::new(),
            extra_args: Vec::new(),
            tools_only: false,
        }
    }
}
