//! Invocations of the external aqt installer CLI.
//!
//! aqt owns version-list matching, downloading, and extraction; this module
//! only assembles invocations and interprets exit codes. Install runs stream
//! their output, query runs capture it.

use camino::Utf8Path;
use tracing::{info, warn};

use qtup_core::error::QtupError;
use qtup_core::types::{HostOs, ToolSpec};

use crate::runner::CommandRunner;
use crate::InstallResult;

/// Handle to the aqt installer binary
#[derive(Debug, Clone)]
pub struct AqtRunner {
    runner: CommandRunner,
    program: String,
}

impl Default for AqtRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AqtRunner {
    /// Handle to `aqt` on PATH
    pub fn new() -> Self {
        Self::with_program("aqt")
    }

    /// Handle to a specific installer binary (tests point this at a stub)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            runner: CommandRunner::new(),
            program: program.into(),
        }
    }

    /// Run a query-style invocation and return its trimmed stdout
    pub async fn run_capture(&self, args: &[String]) -> InstallResult<String> {
        let output = self.runner.run(&self.program, args).await?;
        Ok(output.stdout.trim().to_string())
    }

    /// Install the SDK itself: `aqt install-qt <args>`
    pub async fn install_qt(&self, args: &[String]) -> InstallResult<()> {
        let mut full_args = Vec::with_capacity(args.len() + 1);
        full_args.push("install-qt".to_string());
        full_args.extend(args.iter().cloned());
        self.runner.run_streaming(&self.program, &full_args).await
    }

    /// Install one tool: `aqt install-tool <host> <target> <name> [variant]`
    pub async fn install_tool(
        &self,
        host: HostOs,
        target: &str,
        tool: &ToolSpec,
        output_dir: &Utf8Path,
    ) -> InstallResult<()> {
        let mut args = vec![
            "install-tool".to_string(),
            host.as_str().to_string(),
            target.to_string(),
            tool.name.clone(),
        ];
        if let Some(variant) = &tool.variant {
            args.push(variant.clone());
        }
        args.push("--outputdir".to_string());
        args.push(output_dir.to_string());

        self.runner.run_streaming(&self.program, &args).await
    }

    /// Install every requested tool sequentially, awaiting each before the
    /// next starts. Failures are collected and reported together once the
    /// last tool has finished, so one bad tool cannot hide behind the rest.
    pub async fn install_tools(
        &self,
        host: HostOs,
        target: &str,
        tools: &[ToolSpec],
        output_dir: &Utf8Path,
    ) -> InstallResult<()> {
        let mut failed = Vec::new();

        for tool in tools {
            info!("Installing tool {}", tool);
            match self.install_tool(host, target, tool, output_dir).await {
                Ok(()) => {},
                Err(e) => {
                    warn!("Tool {} failed: {}", tool, e);
                    failed.push(tool.to_string());
                },
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(QtupError::ToolsFailed { failed })
        }
    }
}

#[cfg(test)]
mod tests;
