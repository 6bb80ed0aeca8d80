//! Version resolution through the external list query.
//!
//! Specifier matching itself belongs to the installer; this module formats
//! the query, runs it, and treats a non-zero exit or blank output as fatal.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::{debug, info};

use qtup_core::error::QtupError;
use qtup_core::types::HostOs;
use qtup_install::AqtRunner;

use crate::ResolverResult;

/// The default specifier: newest release of the long-term-support line
pub const LATEST_LTS: &str = "latest-LTS";

/// A formatted list query for the external installer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    /// Host OS token
    pub host: HostOs,
    /// Deployment target
    pub target: String,
    /// Raw version specifier
    pub spec: String,
}

impl ListQuery {
    /// Create a query for one (host, target, spec) combination
    pub fn new(host: HostOs, target: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            host,
            target: target.into(),
            spec: spec.into(),
        }
    }

    /// Argument vector for the external lookup.
    ///
    /// The latest-LTS sentinel asks for the plain newest release; every
    /// other specifier is passed through `--spec` for the installer's own
    /// matching.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "list-qt".to_string(),
            self.host.as_str().to_string(),
            self.target.clone(),
        ];

        if self.spec != LATEST_LTS {
            args.push("--spec".to_string());
            args.push(self.spec.clone());
        }

        args.push("--latest-version".to_string());
        args
    }
}

/// Resolves loose specifiers to exact versions.
///
/// Results are memoized per (spec, host, target), so the post-install
/// recompute for environment naming returns the pre-install answer without
/// a second process spawn. Same inputs, same output, no side effects.
pub struct Resolver {
    aqt: AqtRunner,
    cache: Mutex<HashMap<ListQuery, String>>,
}

impl Resolver {
    /// Create a resolver backed by the given installer handle
    pub fn new(aqt: AqtRunner) -> Self {
        Self {
            aqt,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a specifier to an exact version for a host and target
    pub async fn resolve(&self, spec: &str, host: HostOs, target: &str) -> ResolverResult<String> {
        let query = ListQuery::new(host, target, spec);

        if let Some(hit) = self.cache.lock().await.get(&query) {
            debug!("Resolved '{}' to {} (memoized)", spec, hit);
            return Ok(hit.clone());
        }

        let output = self
            .aqt
            .run_capture(&query.to_args())
            .await
            .map_err(|e| resolution_error(&query, e.to_string()))?;
        let version = parse_lookup_output(&query, &output)?;

        info!("Resolved '{}' to {} for {}/{}", spec, version, host, target);
        self.cache
            .lock()
            .await
            .insert(query, version.clone());
        Ok(version)
    }
}

/// Interpret the lookup's stdout: the last non-blank line is the answer,
/// blank output means nothing matched
pub fn parse_lookup_output(query: &ListQuery, output: &str) -> ResolverResult<String> {
    match output.lines().rev().map(str::trim).find(|line| !line.is_empty()) {
        Some(version) => Ok(version.to_string()),
        None => Err(resolution_error(
            query,
            "lookup returned no matching release".to_string(),
        )),
    }
}

fn resolution_error(query: &ListQuery, reason: String) -> QtupError {
    QtupError::Resolution {
        spec: query.spec.clone(),
        host: query.host.to_string(),
        target: query.target.clone(),
        reason,
    }
}
