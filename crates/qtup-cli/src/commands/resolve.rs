//! `qtup resolve` command implementation.
//!
//! Resolves a specifier to an exact release and reports the architecture
//! that an install would default to, without installing anything.

use qtup_core::error::QtupResult;
use qtup_core::types::HostOs;
use qtup_install::AqtRunner;
use qtup_resolver::{default_arch, Resolver};

use super::CommandContext;

/// Execute the `qtup resolve` command
pub async fn execute(
    spec: String,
    host: Option<String>,
    target: String,
    ctx: &CommandContext,
) -> QtupResult<()> {
    let host = match host {
        Some(host) => host.parse()?,
        None => HostOs::current(),
    };

    let resolver = Resolver::new(AqtRunner::new());
    let version = resolver.resolve(&spec, host, &target).await?;

    ctx.output.success(&format!("{} -> {}", spec, version));

    if let Some(arch) = default_arch(host, &version)? {
        ctx.output
            .info(&format!("Default architecture: {}", arch));
    }

    Ok(())
}
