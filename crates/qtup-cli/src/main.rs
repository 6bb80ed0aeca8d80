//! # qtup-cli
//!
//! CLI for provisioning the Qt SDK on CI build runners.
//!
//! This is the main entry point for the qtup tool. It handles command
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers. Any error bubbles to a single handler
//! here that reports it and marks the run failed.

use std::collections::HashMap;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use qtup_core::error::QtupResult;

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Provision the Qt SDK on CI build runners
#[derive(Parser)]
#[command(name = "qtup", version, about = "Provision the Qt SDK on CI runners")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install the SDK and export its environment
    Install(InstallArgs),
    /// Resolve a version specifier without installing anything
    Resolve {
        /// Version specifier (exact version, SimpleSpec range, or latest-LTS)
        #[arg(default_value = "latest-LTS")]
        spec: String,
        /// Host OS; autodetected when omitted
        #[arg(long)]
        host: Option<String>,
        /// Deployment target
        #[arg(long, default_value = "desktop")]
        target: String,
    },
    /// Re-export the environment for an already-installed release
    Env(EnvArgs),
    /// Show version information
    Version,
}

/// Flags for `qtup install`. Everything is optional; omitted flags fall
/// back to qtup.toml, QTUP_* variables, and finally the built-in defaults.
#[derive(Args, Default)]
pub struct InstallArgs {
    /// Version specifier (exact version, SimpleSpec range, or latest-LTS)
    #[arg(long)]
    pub version: Option<String>,

    /// Host OS: windows, mac, linux, android, or ios
    #[arg(long)]
    pub host: Option<String>,

    /// Deployment target (desktop, android, wasm, ...)
    #[arg(long)]
    pub target: Option<String>,

    /// Architecture token; computed from the release when omitted
    #[arg(long)]
    pub arch: Option<String>,

    /// Install root directory
    #[arg(long)]
    pub dir: Option<Utf8PathBuf>,

    /// Space-delimited extra SDK modules
    #[arg(long)]
    pub modules: Option<String>,

    /// Space-delimited tools; tokens are name[,variant]
    #[arg(long)]
    pub tools: Option<String>,

    /// Export environment variables: true or false
    #[arg(long, value_name = "BOOL")]
    pub set_env: Option<String>,

    /// Skip installation and only project the environment
    #[arg(long)]
    pub cached: bool,

    /// OS prerequisite policy: true, nosudo, or false
    #[arg(long, value_name = "POLICY")]
    pub install_deps: Option<String>,

    /// Install only the requested tools, not the SDK itself
    #[arg(long)]
    pub tools_only: bool,

    /// Verify Python and install helper packages: true or false
    #[arg(long, value_name = "BOOL")]
    pub setup_python: Option<String>,

    /// Pinned aqtinstall version (pip specifier)
    #[arg(long)]
    pub aqt_version: Option<String>,

    /// Pinned py7zr version (pip specifier)
    #[arg(long)]
    pub py7zr_version: Option<String>,

    /// Configuration file (qtup.toml is discovered when omitted)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Verbatim extra arguments passed through to the installer
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl InstallArgs {
    /// Collapse the provided flags into configuration overrides
    pub fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();

        let mut put = |field: &str, value: Option<String>| {
            if let Some(value) = value {
                overrides.insert(field.to_string(), value);
            }
        };

        put("version", self.version.clone());
        put("host", self.host.clone());
        put("target", self.target.clone());
        put("arch", self.arch.clone());
        put("dir", self.dir.as_ref().map(|d| d.to_string()));
        put("modules", self.modules.clone());
        put("tools", self.tools.clone());
        put("set-env", self.set_env.clone());
        put("install-deps", self.install_deps.clone());
        put("setup-python", self.setup_python.clone());
        put("aqt-version", self.aqt_version.clone());
        put("py7zr-version", self.py7zr_version.clone());

        // Switches only override when actually given
        put("cached", self.cached.then(|| "true".to_string()));
        put("tools-only", self.tools_only.then(|| "true".to_string()));

        overrides
    }
}

/// Flags for `qtup env`
#[derive(Args)]
pub struct EnvArgs {
    /// Exact installed version (as previously resolved)
    pub version: String,

    /// Install root directory
    #[arg(long)]
    pub dir: Option<Utf8PathBuf>,

    /// Host OS; autodetected when omitted
    #[arg(long)]
    pub host: Option<String>,

    /// Also export the tools root variable
    #[arg(long)]
    pub tools: bool,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting qtup v{}", env!("CARGO_PKG_VERSION"));

    if let Err(error) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&error));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> QtupResult<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().map_err(|e| qtup_core::error::QtupError::Io {
        message: "Failed to create async runtime".to_string(),
        source: e,
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "qtup_cli={level},qtup_core={level},qtup_config={level},qtup_install={level},qtup_resolver={level},qtup_env={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("qtup encountered an unexpected error: {}", panic_info);
        eprintln!("qtup crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/qtup-rs/qtup/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
