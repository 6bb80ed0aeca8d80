//! `qtup install` command implementation.
//!
//! Runs the full provisioning pipeline: OS prerequisites, installer
//! bootstrap, version resolution, the SDK install itself, tool installs,
//! and finally the environment projection. Steps run strictly one after
//! another and the first failure aborts the rest.

use std::time::Instant;

use camino::Utf8PathBuf;

use qtup_config::{ConfigLoader, ConfigSource, InstallConfig};
use qtup_core::error::QtupResult;
use qtup_core::types::{HostOs, InstallRequest, PlatformTriple};
use qtup_env::{project_environment, EnvApplier};
use qtup_install::{AqtRunner, Bootstrapper, SystemDeps};
use qtup_resolver::{build_install_args, default_arch, Resolver};

use super::CommandContext;
use crate::InstallArgs;

/// Execute the `qtup install` command
pub async fn execute(args: InstallArgs, ctx: &CommandContext) -> QtupResult<()> {
    let start_time = Instant::now();

    ctx.output.step("📦", "Provisioning the Qt SDK");

    // Layer configuration: defaults < qtup.toml < QTUP_* < flags
    let cwd = Utf8PathBuf::from_path_buf(ctx.cwd.clone())
        .unwrap_or_else(|_| Utf8PathBuf::from("."));
    let loader = ConfigLoader::new(cwd);
    let (mut config, source) = loader.load(args.config.as_deref(), &args.overrides()).await?;
    if !args.extra.is_empty() {
        config.extra_args = args.extra.clone();
    }
    if let ConfigSource::ProjectToml(path) = &source {
        ctx.output.info(&format!("Using configuration from {}", path));
    }

    let host = config.host();
    let install_root = config.install_root();
    let aqt = AqtRunner::new();
    let resolver = Resolver::new(aqt.clone());

    if config.cached {
        ctx.output.step("⚡", "Using cached installation");
    } else {
        run_install(&config, host, &install_root, &aqt, &resolver, ctx).await?;
    }

    if config.set_env {
        // Recomputed after the install; the memoized resolver guarantees
        // the exported version matches the installed one
        let version = resolver.resolve(&config.version, host, &config.target).await?;

        ctx.output.step("🌱", "Exporting the build environment");
        let mutations =
            project_environment(&install_root, &version, host, !config.tools.is_empty())?;
        EnvApplier::detect().apply(&mutations).await?;
        ctx.output.info(&format!("Exported {} environment mutations", mutations.len()));
    }

    let duration = start_time.elapsed();
    ctx.output
        .success(&format!("SDK ready in {:.2}s", duration.as_secs_f64()));

    Ok(())
}

/// The install half of the pipeline (everything before env projection)
async fn run_install(
    config: &InstallConfig,
    host: HostOs,
    install_root: &Utf8PathBuf,
    aqt: &AqtRunner,
    resolver: &Resolver,
    ctx: &CommandContext,
) -> QtupResult<()> {
    ctx.output.step("🔧", "Checking OS build prerequisites");
    SystemDeps::new().install(host, config.install_deps).await?;

    if config.setup_python {
        ctx.output.step("🐍", "Bootstrapping the installer");
        let bootstrapper = Bootstrapper::new();
        bootstrapper.check_python().await;
        bootstrapper
            .install_helpers(&config.aqt_version, &config.py7zr_version)
            .await?;
    }

    ctx.output
        .step("🔍", &format!("Resolving version specifier '{}'", config.version));
    let version = resolver.resolve(&config.version, host, &config.target).await?;
    ctx.output.info(&format!("Resolved to {}", version));

    let triple = pick_triple(config, host, &version)?;
    if let Some(arch) = &triple.arch {
        if config.arch.is_none() {
            ctx.output.info(&format!("Using default architecture {}", arch));
        }
    }

    if !config.tools_only {
        ctx.output.step("⬇", &format!("Installing Qt {}", version));
        let mut request = InstallRequest::new(triple, version.clone());
        request.modules = config.modules.clone();
        request.extra_args = config.extra_args.clone();

        let install_args = build_install_args(&request, install_root);
        aqt.install_qt(&install_args).await?;
    }

    if !config.tools.is_empty() {
        ctx.output
            .step("🧰", &format!("Installing {} tool(s)", config.tools.len()));
        aqt.install_tools(host, &config.target, &config.tools, install_root)
            .await?;
    }

    Ok(())
}

/// The configured triple, with the default architecture filled in when the
/// user supplied none
fn pick_triple(config: &InstallConfig, host: HostOs, version: &str) -> QtupResult<PlatformTriple> {
    let triple = config.triple();
    if triple.arch.is_some() {
        return Ok(triple);
    }

    match default_arch(host, version)? {
        Some(arch) => Ok(triple.with_arch(arch)),
        None => Ok(triple),
    }
}
