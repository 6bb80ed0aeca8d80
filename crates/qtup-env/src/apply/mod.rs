//! Boundary adapter that applies computed mutations.
//!
//! The applier is the only place the process or runner environment is
//! touched. Append semantics are resolved here, against the environment as
//! it is at apply time: an existing non-empty value gets `:value` appended,
//! an unset one is set to the bare value with no leading separator.

use camino::Utf8PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use qtup_core::error::QtupError;
use qtup_core::types::{EnvMutation, EnvOp};

use crate::EnvResult;

/// Where exported variables land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSink {
    /// Runner-provided files: one for variables, one for PATH entries
    GithubFiles {
        env_file: Utf8PathBuf,
        path_file: Utf8PathBuf,
    },
    /// Plain shell `export` lines on stdout, for eval by the calling shell
    Shell,
}

/// Applies mutations to the runner environment
#[derive(Debug, Clone)]
pub struct EnvApplier {
    sink: EnvSink,
}

impl EnvApplier {
    /// Create an applier for an explicit sink
    pub fn new(sink: EnvSink) -> Self {
        Self { sink }
    }

    /// Detect the runner's export mechanism: the GitHub files when the
    /// runner provides both, shell exports otherwise
    pub fn detect() -> Self {
        let env_file = std::env::var("GITHUB_ENV").unwrap_or_default();
        let path_file = std::env::var("GITHUB_PATH").unwrap_or_default();

        let sink = if !env_file.is_empty() && !path_file.is_empty() {
            EnvSink::GithubFiles {
                env_file: Utf8PathBuf::from(env_file),
                path_file: Utf8PathBuf::from(path_file),
            }
        } else {
            EnvSink::Shell
        };

        Self { sink }
    }

    /// Apply every mutation in order.
    ///
    /// The current process environment is kept in sync as well, so a later
    /// mutation (or step in the same process) observes earlier ones.
    pub async fn apply(&self, mutations: &[EnvMutation]) -> EnvResult<()> {
        for mutation in mutations {
            let value = resolve_value(mutation);
            debug!("Exporting {}={}", mutation.name, value);

            match mutation.op {
                EnvOp::PrependPath => {
                    let current = std::env::var("PATH").unwrap_or_default();
                    let merged = if current.is_empty() {
                        value.clone()
                    } else {
                        format!("{}:{}", value, current)
                    };
                    std::env::set_var("PATH", merged);

                    match &self.sink {
                        EnvSink::GithubFiles { path_file, .. } => {
                            append_line(path_file, &value).await?;
                        },
                        EnvSink::Shell => {
                            println!("export PATH=\"{}:$PATH\"", value);
                        },
                    }
                },
                EnvOp::Set | EnvOp::AppendColon => {
                    std::env::set_var(&mutation.name, &value);

                    match &self.sink {
                        EnvSink::GithubFiles { env_file, .. } => {
                            append_line(env_file, &format!("{}={}", mutation.name, value)).await?;
                        },
                        EnvSink::Shell => {
                            println!("{}", shell_export_line(&mutation.name, &value));
                        },
                    }
                },
            }
        }

        info!("Exported {} environment mutations", mutations.len());
        Ok(())
    }
}

/// Resolve a mutation's final value against the current environment
pub fn resolve_value(mutation: &EnvMutation) -> String {
    match mutation.op {
        EnvOp::AppendColon => match std::env::var(&mutation.name) {
            Ok(current) if !current.is_empty() => format!("{}:{}", current, mutation.value),
            _ => mutation.value.clone(),
        },
        EnvOp::Set | EnvOp::PrependPath => mutation.value.clone(),
    }
}

/// Render one shell export line
pub fn shell_export_line(name: &str, value: &str) -> String {
    format!("export {}=\"{}\"", name, value)
}

async fn append_line(path: &Utf8PathBuf, line: &str) -> EnvResult<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| QtupError::io(format!("Failed to open {}", path), e))?;

    file.write_all(format!("{}\n", line).as_bytes())
        .await
        .map_err(|e| QtupError::io(format!("Failed to write {}", path), e))
}
