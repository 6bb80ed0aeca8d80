//! Configuration layering, fallback logic, and environment overrides.
//!
//! Precedence, lowest to highest: built-in defaults, qtup.toml, QTUP_*
//! environment variables, CLI flags.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use qtup_core::error::QtupError;
use qtup_core::types::ToolSpec;
use qtup_core::utils::split_list;

use crate::install::InstallConfig;
use crate::ConfigResult;

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
}

/// Configuration source tracking
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Built-in defaults only
    Defaults,
    /// Project qtup.toml file
    ProjectToml(Utf8PathBuf),
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd }
    }

    /// Load layered configuration.
    ///
    /// An explicitly named file must exist; the discovered qtup.toml is
    /// optional. CLI overrides are applied last.
    pub async fn load(
        &self,
        explicit_file: Option<&Utf8Path>,
        cli_overrides: &HashMap<String, String>,
    ) -> ConfigResult<(InstallConfig, ConfigSource)> {
        let mut config = InstallConfig::default();
        let mut source = ConfigSource::Defaults;

        match explicit_file {
            Some(path) => {
                let file = crate::file::load_from_file(path).await?;
                file.apply_to(&mut config)?;
                source = ConfigSource::ProjectToml(path.to_owned());
            },
            None => {
                if let Some(path) = self.resolve_config_path("qtup.toml") {
                    debug!("Using configuration file {}", path);
                    let file = crate::file::load_from_file(&path).await?;
                    file.apply_to(&mut config)?;
                    source = ConfigSource::ProjectToml(path);
                }
            },
        }

        apply_env_overrides(&mut config, &collect_env_overrides())?;
        apply_cli_overrides(&mut config, cli_overrides)?;
        config.validate()?;

        Ok((config, source))
    }

    /// Find a configuration file, walking up the directory tree
    pub fn resolve_config_path(&self, filename: &str) -> Option<Utf8PathBuf> {
        let mut current = self.cwd.as_path();

        loop {
            let config_path = current.join(filename);
            if config_path.exists() {
                return Some(config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}

/// Collect QTUP_* environment variable overrides
pub fn collect_env_overrides() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(key, _)| key.starts_with("QTUP_"))
        .collect()
}

/// Apply QTUP_* environment variable overrides
pub fn apply_env_overrides(
    config: &mut InstallConfig,
    overrides: &HashMap<String, String>,
) -> ConfigResult<()> {
    for (key, value) in overrides {
        let Some(field) = key.strip_prefix("QTUP_") else {
            continue;
        };
        let field = field.to_lowercase().replace('_', "-");
        apply_override(config, &field, value)?;
    }

    Ok(())
}

/// Apply CLI flag overrides (highest priority)
pub fn apply_cli_overrides(
    config: &mut InstallConfig,
    overrides: &HashMap<String, String>,
) -> ConfigResult<()> {
    for (field, value) in overrides {
        apply_override(config, field, value)?;
    }

    Ok(())
}

/// Apply one override by normalized field name. Unknown fields are ignored
/// so stray QTUP_* variables cannot break a run.
fn apply_override(config: &mut InstallConfig, field: &str, value: &str) -> ConfigResult<()> {
    match field {
        "dir" => config.dir = Some(Utf8PathBuf::from(value)),
        "version" => config.version = value.to_string(),
        "host" => config.host = Some(value.parse()?),
        "target" => config.target = value.to_string(),
        "arch" => config.arch = Some(value.to_string()),
        "modules" => config.modules = split_list(value),
        "tools" => config.tools = ToolSpec::parse_list(value)?,
        "set-env" => config.set_env = parse_bool(field, value)?,
        "cached" => config.cached = parse_bool(field, value)?,
        "install-deps" => config.install_deps = value.parse()?,
        "tools-only" => config.tools_only = parse_bool(field, value)?,
        "aqt-version" => config.aqt_version = value.to_string(),
        "py7zr-version" => config.py7zr_version = value.to_string(),
        "setup-python" => config.setup_python = parse_bool(field, value)?,
        _ => {
            debug!("Ignoring unknown configuration override '{}'", field);
        },
    }

    Ok(())
}

/// Parse a boolean override value
fn parse_bool(field: &str, value: &str) -> ConfigResult<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(QtupError::ConfigValidation {
            field: field.to_string(),
            reason: format!("Expected true or false, got '{}'", other),
        }),
    }
}
