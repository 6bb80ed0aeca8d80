//! The install configuration record and its defaults.

use camino::Utf8PathBuf;

use qtup_core::error::QtupError;
use qtup_core::types::{DepsPolicy, HostOs, PlatformTriple, ToolSpec};

use crate::ConfigResult;

/// Every install input, with stated defaults applied where the user gave
/// nothing. Host and architecture stay unset here when they are to be
/// autodetected or computed downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallConfig {
    /// Install root; default is `<workspace>/Qt`
    pub dir: Option<Utf8PathBuf>,
    /// Version specifier: exact version, SimpleSpec range, or "latest-LTS"
    pub version: String,
    /// Host OS; autodetected from the running OS when unset
    pub host: Option<HostOs>,
    /// Deployment target category
    pub target: String,
    /// Architecture token; computed from the policy table when unset
    pub arch: Option<String>,
    /// Extra SDK modules
    pub modules: Vec<String>,
    /// Tools to install
    pub tools: Vec<ToolSpec>,
    /// Export environment variables after install
    pub set_env: bool,
    /// Skip installation, only project the environment
    pub cached: bool,
    /// OS prerequisite policy
    pub install_deps: DepsPolicy,
    /// Install only the requested tools, not the SDK
    pub tools_only: bool,
    /// Verbatim passthrough arguments for the installer
    pub extra_args: Vec<String>,
    /// Pinned installer package version (pip specifier)
    pub aqt_version: String,
    /// Pinned archive-helper package version (pip specifier)
    pub py7zr_version: String,
    /// Verify the Python interpreter and install the helper packages
    pub setup_python: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            dir: None,
            version: "latest-LTS".to_string(),
            host: None,
            target: "desktop".to_string(),
            arch: None,
            modules: Vec::new(),
            tools: Vec::new(),
            set_env: true,
            cached: false,
            install_deps: DepsPolicy::Sudo,
            tools_only: false,
            extra_args: Vec::new(),
            aqt_version: "==3.1.*".to_string(),
            py7zr_version: "==0.20.*".to_string(),
            setup_python: true,
        }
    }
}

impl InstallConfig {
    /// Validate field combinations that no single parser can catch
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version.trim().is_empty() {
            return Err(QtupError::ConfigValidation {
                field: "version".to_string(),
                reason: "Version specifier must not be empty".to_string(),
            });
        }

        if self.target.trim().is_empty() {
            return Err(QtupError::ConfigValidation {
                field: "target".to_string(),
                reason: "Target must not be empty".to_string(),
            });
        }

        if self.tools_only && self.tools.is_empty() {
            return Err(QtupError::ConfigValidation {
                field: "tools-only".to_string(),
                reason: "tools-only requires at least one tool".to_string(),
            });
        }

        Ok(())
    }

    /// Host OS, falling back to the running OS
    pub fn host(&self) -> HostOs {
        self.host.unwrap_or_else(HostOs::current)
    }

    /// Install root, falling back to `<workspace>/Qt`
    pub fn install_root(&self) -> Utf8PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => workspace_root().join("Qt"),
        }
    }

    /// The platform triple as configured (arch may still be unset)
    pub fn triple(&self) -> PlatformTriple {
        let triple = PlatformTriple::new(self.host(), self.target.clone());
        match &self.arch {
            Some(arch) => triple.with_arch(arch.clone()),
            None => triple,
        }
    }
}

/// The runner workspace directory: GITHUB_WORKSPACE when the runner provides
/// it, the current directory otherwise.
pub fn workspace_root() -> Utf8PathBuf {
    if let Ok(workspace) = std::env::var("GITHUB_WORKSPACE") {
        if !workspace.is_empty() {
            return Utf8PathBuf::from(workspace);
        }
    }

    std::env::current_dir()
        .ok()
        .and_then(|cwd| Utf8PathBuf::from_path_buf(cwd).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}
