//! Host platform and target triple types.
//!
//! A triple identifies what the installer is asked to provision: the host OS
//! the SDK runs on, the deployment target category, and (sometimes) a CPU
//! architecture token. Whether the architecture token is actually passed to
//! the installer is an invariant of the triple, not of the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QtupError;

/// Host operating system an SDK build is provisioned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    Mac,
    /// Linux
    Linux,
    /// Google Android
    Android,
    /// Apple iOS
    Ios,
}

impl HostOs {
    /// The token the external installer expects for this host
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::Mac => "mac",
            HostOs::Linux => "linux",
            HostOs::Android => "android",
            HostOs::Ios => "ios",
        }
    }

    /// Host for the running OS. Anything that is not Windows or macOS
    /// defaults to linux.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::Mac
        } else {
            HostOs::Linux
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostOs {
    type Err = QtupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "windows" => Ok(HostOs::Windows),
            "mac" => Ok(HostOs::Mac),
            "linux" => Ok(HostOs::Linux),
            "android" => Ok(HostOs::Android),
            "ios" => Ok(HostOs::Ios),
            other => Err(QtupError::ConfigValidation {
                field: "host".to_string(),
                reason: format!(
                    "Unknown host '{}'. Expected one of: windows, mac, linux, android, ios",
                    other
                ),
            }),
        }
    }
}

/// Host OS, deployment target, and optional CPU architecture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTriple {
    /// Host operating system
    pub host: HostOs,
    /// Deployment target category ("desktop", "android", "wasm", ...)
    pub target: String,
    /// CPU architecture token, when one was supplied or computed
    pub arch: Option<String>,
}

impl PlatformTriple {
    /// Create a triple with no architecture token
    pub fn new(host: HostOs, target: impl Into<String>) -> Self {
        Self {
            host,
            target: target.into(),
            arch: None,
        }
    }

    /// Attach an architecture token. Empty strings count as absent.
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        let arch = arch.into();
        self.arch = if arch.is_empty() { None } else { Some(arch) };
        self
    }

    /// Whether the installer invocation carries the architecture token.
    ///
    /// The installer only accepts an arch positional for windows and android
    /// hosts, android deployment targets, and the wasm_32 architecture; for
    /// every other combination the token is omitted even when one is known.
    pub fn requires_arch(&self) -> bool {
        matches!(self.host, HostOs::Windows | HostOs::Android)
            || self.target == "android"
            || self.arch.as_deref() == Some("wasm_32")
    }

    /// The arch token to emit in an installer invocation, if any
    pub fn arch_for_install(&self) -> Option<&str> {
        if self.requires_arch() {
            self.arch.as_deref().filter(|a| !a.is_empty())
        } else {
            None
        }
    }
}
