//! Async command execution with captured output.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use qtup_core::error::QtupError;

use crate::InstallResult;

/// Output of a successfully finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Runs external commands one at a time, each awaited to completion before
/// the next begins. A non-zero exit is an error carrying the rendered
/// command line; there are no retries and no timeout layer.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    /// Create a new command runner
    pub fn new() -> Self {
        Self
    }

    /// Run a command with captured output
    pub async fn run(&self, program: &str, args: &[String]) -> InstallResult<CommandOutput> {
        let command_line = render_command(program, args);
        debug!("Running: {}", command_line);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| QtupError::Spawn {
                command: command_line.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            warn!("Command failed ({}): {}", output.status, command_line);
            if !stderr.trim().is_empty() {
                warn!("stderr: {}", stderr.trim());
            }
            return Err(QtupError::InstallerExit {
                command: command_line,
                code: output.status.code(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }

    /// Run a command with inherited stdio, for long installer runs where the
    /// user should see progress as it happens
    pub async fn run_streaming(&self, program: &str, args: &[String]) -> InstallResult<()> {
        let command_line = render_command(program, args);
        debug!("Running: {}", command_line);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| QtupError::Spawn {
                command: command_line.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(QtupError::InstallerExit {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Render a program and its arguments for logs and error messages
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        if arg.contains(' ') {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_command_quotes_spaces() {
        assert_eq!(
            render_command("aqt", &args(&["list-qt", "--spec", "5.15 6.2"])),
            "aqt list-qt --spec \"5.15 6.2\""
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout() {
        let runner = CommandRunner::new();
        let output = runner.run("echo", &args(&["hello"])).await.unwrap();
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_error() {
        let runner = CommandRunner::new();
        let result = runner.run("false", &[]).await;
        assert!(matches!(result, Err(QtupError::InstallerExit { code: Some(1), .. })));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let runner = CommandRunner::new();
        let result = runner.run("qtup-definitely-not-a-program", &[]).await;
        assert!(matches!(result, Err(QtupError::Spawn { .. })));
    }
}
