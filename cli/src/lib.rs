//! Command implementations for the `lookout` binary
//!
//! Each command is a plain function so integration tests can call it
//! without spawning the binary.

pub mod error;

pub use error::{CliError, Result};

use lookout_core::config::{load_harness_from_toml_path, HarnessFile};
use lookout_core::probe::{probe_all, report_probe};
use schema::{ProbeReport, ProbeRequest};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Probe a single URL once
pub async fn probe_url(url: &str, timeout_ms: u64, timeout_message: &str) -> Result<ProbeReport> {
    if timeout_ms == 0 {
        return Err(CliError::InvalidArgument("--timeout-ms must be > 0".to_string()));
    }
    let request = ProbeRequest {
        url: url.to_string(),
        timeout_ms,
        timeout_message: timeout_message.to_string(),
    };
    let report = report_probe(&request).await;
    log_report(&report);
    Ok(report)
}

/// Probe every endpoint listed in a harness config file, concurrently
pub async fn check_config(path: &Path) -> Result<Vec<ProbeReport>> {
    let harness = load_harness_from_toml_path(path)?;
    let requests = harness.probe_requests();
    if requests.is_empty() {
        return Err(CliError::ConfigError(format!(
            "{} lists no endpoints",
            path.display()
        )));
    }

    info!("checking {} endpoints from {}", requests.len(), path.display());
    let reports = probe_all(&requests).await;
    reports.iter().for_each(log_report);
    Ok(reports)
}

/// Fail with `CliError::Unreachable` unless every report is reachable
pub fn ensure_all_reachable(reports: &[ProbeReport]) -> Result<()> {
    let failed = reports.iter().filter(|r| !r.reachable).count();
    if failed > 0 {
        return Err(CliError::Unreachable(failed, reports.len()));
    }
    Ok(())
}

/// Inputs for rendering an agent configuration map
#[derive(Debug, Clone, Default)]
pub struct AgentConfigArgs {
    /// Harness config whose `[agent]` section provides the base values
    pub config: Option<PathBuf>,
    /// REST controller URL; selects the REST variant
    pub rest_url: Option<String>,
    pub label: Option<String>,
    pub db_namespace: Option<String>,
    pub http_resolvers: Vec<String>,
}

/// Build the agent configuration map, with flags overriding the config file
pub fn agent_config_map(args: &AgentConfigArgs) -> Result<Map<String, Value>> {
    let mut harness = match &args.config {
        Some(path) => load_harness_from_toml_path(path)?,
        None => HarnessFile::default(),
    };

    let agent = &mut harness.agent;
    if let Some(url) = &args.rest_url {
        agent.rest_url = Some(url.clone());
    }
    if let Some(label) = &args.label {
        agent.label = label.clone();
    }
    if let Some(ns) = &args.db_namespace {
        agent.db_namespace = ns.clone();
    }
    if !args.http_resolvers.is_empty() {
        agent.http_resolver_urls = args.http_resolvers.clone();
    }

    let config = harness.agent_config();
    config.validate()?;
    Ok(config.to_config_map()?)
}

/// One-line human-readable rendering of a report
pub fn render_report(report: &ProbeReport) -> String {
    let kind = report.kind.map(|k| k.as_str()).unwrap_or("?");
    if report.reachable {
        let status = report
            .status
            .map(|s| format!("status {}, ", s))
            .unwrap_or_default();
        format!(
            "ok    {:<4} {} ({}{}ms)",
            kind, report.url, status, report.elapsed_ms
        )
    } else {
        format!(
            "FAIL  {:<4} {}: {} ({}ms)",
            kind,
            report.url,
            report.error.as_deref().unwrap_or("unreachable"),
            report.elapsed_ms
        )
    }
}

fn log_report(report: &ProbeReport) {
    if !report.reachable {
        warn!(
            "{} unreachable: {}",
            report.url,
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
}
