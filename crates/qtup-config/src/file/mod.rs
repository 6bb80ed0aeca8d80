//! qtup.toml configuration parsing.
//!
//! The file mirrors the CLI inputs one-to-one; every field is optional and
//! anything present overrides the built-in defaults (but not environment or
//! CLI overrides).

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use qtup_core::error::QtupError;
use qtup_core::types::ToolSpec;
use qtup_core::utils::split_list;

use crate::install::InstallConfig;
use crate::ConfigResult;

/// Complete qtup.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QtupToml {
    /// The [install] section
    #[serde(default)]
    pub install: InstallSection,
}

/// The [install] section of qtup.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallSection {
    /// Install root directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Version specifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Host OS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Deployment target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Architecture token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    /// Space-delimited module list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<String>,

    /// Space-delimited tool list, tokens are name[,variant]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,

    /// Export environment variables after install
    #[serde(default, rename = "set-env", skip_serializing_if = "Option::is_none")]
    pub set_env: Option<bool>,

    /// Skip installation, only project the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,

    /// OS prerequisite policy: true, nosudo, or false
    #[serde(default, rename = "install-deps", skip_serializing_if = "Option::is_none")]
    pub install_deps: Option<String>,

    /// Install only the requested tools
    #[serde(default, rename = "tools-only", skip_serializing_if = "Option::is_none")]
    pub tools_only: Option<bool>,

    /// Verbatim passthrough arguments for the installer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,

    /// Pinned installer package version
    #[serde(default, rename = "aqt-version", skip_serializing_if = "Option::is_none")]
    pub aqt_version: Option<String>,

    /// Pinned archive-helper package version
    #[serde(default, rename = "py7zr-version", skip_serializing_if = "Option::is_none")]
    pub py7zr_version: Option<String>,

    /// Verify the Python interpreter and install helper packages
    #[serde(default, rename = "setup-python", skip_serializing_if = "Option::is_none")]
    pub setup_python: Option<bool>,
}

/// Parse TOML string to a QtupToml configuration
pub fn parse_qtup_toml(content: &str) -> ConfigResult<QtupToml> {
    // First pass with toml_edit for better syntax error locations
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| QtupError::TomlParse {
            message: format!("TOML syntax error: {}", e),
        })?;

    // Then parse with serde for type safety
    toml::from_str(content).map_err(|e| QtupError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })
}

/// Load and parse qtup.toml from a file path
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<QtupToml> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| QtupError::io(format!("Failed to read {}", path), e))?;

    parse_qtup_toml(&content).map_err(|e| match e {
        QtupError::TomlParse { message } => QtupError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        other => other,
    })
}

impl QtupToml {
    /// Overlay everything present in the file onto a configuration
    pub fn apply_to(&self, config: &mut InstallConfig) -> ConfigResult<()> {
        let section = &self.install;

        if let Some(dir) = &section.dir {
            config.dir = Some(dir.clone().into());
        }
        if let Some(version) = &section.version {
            config.version = version.clone();
        }
        if let Some(host) = &section.host {
            config.host = Some(host.parse()?);
        }
        if let Some(target) = &section.target {
            config.target = target.clone();
        }
        if let Some(arch) = &section.arch {
            config.arch = Some(arch.clone());
        }
        if let Some(modules) = &section.modules {
            config.modules = split_list(modules);
        }
        if let Some(tools) = &section.tools {
            config.tools = ToolSpec::parse_list(tools)?;
        }
        if let Some(set_env) = section.set_env {
            config.set_env = set_env;
        }
        if let Some(cached) = section.cached {
            config.cached = cached;
        }
        if let Some(install_deps) = &section.install_deps {
            config.install_deps = install_deps.parse()?;
        }
        if let Some(tools_only) = section.tools_only {
            config.tools_only = tools_only;
        }
        if !section.extra.is_empty() {
            config.extra_args = section.extra.clone();
        }
        if let Some(aqt_version) = &section.aqt_version {
            config.aqt_version = aqt_version.clone();
        }
        if let Some(py7zr_version) = &section.py7zr_version {
            config.py7zr_version = py7zr_version.clone();
        }
        if let Some(setup_python) = section.setup_python {
            config.setup_python = setup_python;
        }

        Ok(())
    }
}
