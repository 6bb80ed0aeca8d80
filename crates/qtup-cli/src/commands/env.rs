//! `qtup env` command implementation.
//!
//! Re-projects the environment for a release that is already on disk, the
//! standalone form of the cached install path.

use qtup_config::install::workspace_root;
use qtup_core::error::QtupResult;
use qtup_core::types::HostOs;
use qtup_env::{project_environment, EnvApplier};

use super::CommandContext;
use crate::EnvArgs;

/// Execute the `qtup env` command
pub async fn execute(args: EnvArgs, ctx: &CommandContext) -> QtupResult<()> {
    let host = match args.host {
        Some(host) => host.parse()?,
        None => HostOs::current(),
    };

    let install_root = match args.dir {
        Some(dir) => dir,
        None => workspace_root().join("Qt"),
    };

    ctx.output.step(
        "🌱",
        &format!("Exporting the build environment for Qt {}", args.version),
    );

    let mutations = project_environment(&install_root, &args.version, host, args.tools)?;
    EnvApplier::detect().apply(&mutations).await?;

    ctx.output
        .success(&format!("Exported {} environment mutations", mutations.len()));

    Ok(())
}
