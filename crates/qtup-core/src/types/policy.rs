//! Provisioning policies shared between configuration and collaborators.

use std::fmt;
use std::str::FromStr;

use crate::error::QtupError;

/// Policy for installing native build prerequisites through the OS package
/// manager (linux hosts only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepsPolicy {
    /// Install through sudo (the usual CI runner setup)
    #[default]
    Sudo,
    /// Install without sudo (already-root containers)
    NoSudo,
    /// Skip prerequisite installation entirely
    Skip,
}

impl FromStr for DepsPolicy {
    type Err = QtupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(DepsPolicy::Sudo),
            "nosudo" => Ok(DepsPolicy::NoSudo),
            "false" => Ok(DepsPolicy::Skip),
            other => Err(QtupError::ConfigValidation {
                field: "install-deps".to_string(),
                reason: format!("Expected true, nosudo, or false, got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for DepsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DepsPolicy::Sudo => "true",
            DepsPolicy::NoSudo => "nosudo",
            DepsPolicy::Skip => "false",
        })
    }
}
