//! Python interpreter verification and helper package installation.
//!
//! The external installer is a Python package. Before invoking it, the
//! interpreter is probed (the result is only logged; pip will surface a
//! genuinely missing interpreter on its own) and the two helper packages
//! are pip-installed at their pinned versions.

use tracing::{info, warn};

use qtup_core::error::QtupError;
use qtup_core::types::version::parse_version;

use crate::runner::CommandRunner;
use crate::InstallResult;

/// Minimum interpreter version the installer supports
const MIN_PYTHON: (u64, u64) = (3, 6);

/// Python/pip bootstrap collaborator
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    runner: CommandRunner,
    python: String,
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrapper {
    /// Bootstrap through `python3` on PATH
    pub fn new() -> Self {
        Self::with_python("python3")
    }

    /// Bootstrap through a specific interpreter (tests point this at a stub)
    pub fn with_python(program: impl Into<String>) -> Self {
        Self {
            runner: CommandRunner::new(),
            python: program.into(),
        }
    }

    /// Probe the interpreter and report its version, if it is runnable.
    ///
    /// The outcome is logged and returned, never fatal here: a missing or
    /// too-old interpreter fails the pip step with a better message.
    pub async fn check_python(&self) -> Option<String> {
        match self.runner.run(&self.python, &["--version".to_string()]).await {
            Ok(output) => {
                // Old interpreters print the banner on stderr
                let line = if output.stdout.trim().is_empty() {
                    output.stderr
                } else {
                    output.stdout
                };
                let line = line.trim();
                let version = line.strip_prefix("Python ").unwrap_or(line).to_string();

                if below_minimum(&version) {
                    warn!(
                        "Python {} is older than the supported minimum {}.{}",
                        version, MIN_PYTHON.0, MIN_PYTHON.1
                    );
                } else {
                    info!("Found Python {}", version);
                }
                Some(version)
            },
            Err(e) => {
                warn!("No usable Python interpreter: {}", e);
                None
            },
        }
    }

    /// pip-install the pinned helper packages (archive helper first, then
    /// the installer itself)
    pub async fn install_helpers(&self, aqt_pin: &str, py7zr_pin: &str) -> InstallResult<()> {
        let args: Vec<String> = vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            pin_requirement("py7zr", py7zr_pin),
            pin_requirement("aqtinstall", aqt_pin),
        ];

        self.runner
            .run(&self.python, &args)
            .await
            .map_err(|e| QtupError::Bootstrap {
                component: "pip".to_string(),
                reason: e.to_string(),
            })?;

        info!("Installed helper packages (py7zr{}, aqtinstall{})", py7zr_pin, aqt_pin);
        Ok(())
    }
}

/// Render a pip requirement from a package name and a pin that may or may
/// not carry its own operator ("==3.1.*" and "3.1.0" are both accepted)
fn pin_requirement(package: &str, pin: &str) -> String {
    let pin = pin.trim();
    if pin.is_empty() {
        package.to_string()
    } else if pin.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}=={}", package, pin)
    } else {
        format!("{}{}", package, pin)
    }
}

/// Whether a reported interpreter version is below the supported minimum.
/// Unparseable versions are assumed acceptable.
fn below_minimum(version: &str) -> bool {
    match parse_version(version) {
        Ok(v) => (v.major, v.minor) < MIN_PYTHON,
        Err(_) => false,
    }
}
