//! Native build prerequisites through the OS package manager.
//!
//! Only linux hosts need anything installed; the other runner images ship
//! with the toolchains the SDK links against.

use tracing::{debug, info};

use qtup_core::types::{DepsPolicy, HostOs};

use crate::runner::CommandRunner;
use crate::InstallResult;

/// Packages the SDK's desktop libraries link against on a bare runner
const APT_PACKAGES: &[&str] = &[
    "build-essential",
    "libgl1-mesa-dev",
    "libxkbcommon-x11-0",
    "libpulse-dev",
];

/// OS package manager collaborator
#[derive(Debug, Clone)]
pub struct SystemDeps {
    runner: CommandRunner,
    apt_get: String,
}

impl Default for SystemDeps {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemDeps {
    /// Use `apt-get` on PATH
    pub fn new() -> Self {
        Self::with_program("apt-get")
    }

    /// Use a specific package manager binary (tests point this at a stub)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            runner: CommandRunner::new(),
            apt_get: program.into(),
        }
    }

    /// Install prerequisites according to the policy. A no-op for non-linux
    /// hosts and for the skip policy.
    pub async fn install(&self, host: HostOs, policy: DepsPolicy) -> InstallResult<()> {
        if policy == DepsPolicy::Skip {
            info!("Skipping OS build prerequisites");
            return Ok(());
        }

        if host != HostOs::Linux {
            debug!("No OS prerequisites needed for {} hosts", host);
            return Ok(());
        }

        let sudo = policy == DepsPolicy::Sudo;
        self.apt(sudo, &["update"]).await?;

        let mut install_args = vec!["install", "-y"];
        install_args.extend_from_slice(APT_PACKAGES);
        self.apt(sudo, &install_args).await?;

        info!("Installed OS build prerequisites");
        Ok(())
    }

    async fn apt(&self, sudo: bool, args: &[&str]) -> InstallResult<()> {
        let (program, full_args): (&str, Vec<String>) = if sudo {
            (
                "sudo",
                std::iter::once(self.apt_get.clone())
                    .chain(args.iter().map(|s| s.to_string()))
                    .collect(),
            )
        } else {
            (
                self.apt_get.as_str(),
                args.iter().map(|s| s.to_string()).collect(),
            )
        };

        self.runner.run(program, &full_args).await?;
        Ok(())
    }
}
