//! Command implementations and dispatch logic.
//!
//! This module contains all command handlers and the central dispatch
//! system. Each command is implemented as an async function that takes a
//! CommandContext.

use std::path::PathBuf;

use tracing::info;

use qtup_core::error::QtupResult;

pub mod env;
pub mod install;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::output::OutputHandler;
use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> QtupResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| qtup_core::error::QtupError::Io {
            message: "Failed to get current directory".to_string(),
            source: e,
        })?;

        let output = OutputHandler::new();

        Ok(Self { cwd, output })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> QtupResult<()> {
    match command {
        Commands::Install(args) => {
            info!("Installing SDK (cached: {}, tools-only: {})", args.cached, args.tools_only);
            install::execute(args, ctx).await
        },
        Commands::Resolve { spec, host, target } => {
            info!("Resolving '{}' for target {}", spec, target);
            resolve::execute(spec, host, target, ctx).await
        },
        Commands::Env(args) => {
            info!("Projecting environment for version {}", args.version);
            env::execute(args, ctx).await
        },
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx)
        },
    }
}

/// Show version information
fn show_version(ctx: &CommandContext) -> QtupResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("qtup v{}", version));
    ctx.output.info(&format!("Built: {}", build_date));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}
