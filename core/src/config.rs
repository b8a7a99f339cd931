//! Harness configuration loading and validation
//!
//! This module parses a TOML file listing endpoints to probe and the agent
//! defaults used to build configuration maps, applies serde defaults, and
//! performs strict validation with field-path error messages.

use crate::agent::AgentConfig;
use crate::{CoreError, Result};
use schema::{
    AgentOptions, AgentSection, Endpoint, ProbeDefaults, ProbeKind, ProbeRequest,
    RestAgentOptions,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level TOML structure for the harness configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HarnessFile {
    /// Defaults for endpoints that do not override them
    #[serde(default)]
    pub probe: ProbeDefaults,

    /// Agent configuration defaults
    #[serde(default)]
    pub agent: AgentSection,

    /// Endpoints to probe
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl HarnessFile {
    /// Validate the configuration and return `Result<()>` with field-path errors
    pub fn validate(&self) -> Result<()> {
        if self.probe.timeout_ms == 0 {
            return Err(CoreError::ValidationError(
                "probe.timeoutMs: must be > 0".to_string(),
            ));
        }

        for (i, endpoint) in self.endpoints.iter().enumerate() {
            if endpoint.url.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "endpoints[{}].url: cannot be empty",
                    i
                )));
            }
            if ProbeKind::from_url(&endpoint.url).is_none() {
                return Err(CoreError::ValidationError(format!(
                    "endpoints[{}].url: unsupported protocol in '{}' (expected http(s) or ws(s))",
                    i, endpoint.url
                )));
            }
            if endpoint.timeout_ms == Some(0) {
                return Err(CoreError::ValidationError(format!(
                    "endpoints[{}].timeoutMs: must be > 0",
                    i
                )));
            }
        }

        let a = &self.agent;
        if a.label.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "agent.label: cannot be empty".to_string(),
            ));
        }
        if a.assets_path.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "agent.assetsPath: cannot be empty".to_string(),
            ));
        }
        for (i, url) in a.http_resolver_urls.iter().enumerate() {
            if !url.starts_with("http") {
                return Err(CoreError::ValidationError(format!(
                    "agent.httpResolverUrls[{}]: '{}' is not an http(s) url",
                    i, url
                )));
            }
        }
        if let Some(rest) = &a.rest_url {
            if !rest.starts_with("http") {
                return Err(CoreError::ValidationError(format!(
                    "agent.restUrl: '{}' is not an http(s) url",
                    rest
                )));
            }
        }

        Ok(())
    }

    /// Resolve every endpoint against the `[probe]` defaults
    pub fn probe_requests(&self) -> Vec<ProbeRequest> {
        self.endpoints
            .iter()
            .map(|e| ProbeRequest {
                url: e.url.clone(),
                timeout_ms: e.timeout_ms.unwrap_or(self.probe.timeout_ms),
                timeout_message: e
                    .timeout_message
                    .clone()
                    .unwrap_or_else(|| self.probe.timeout_message.clone()),
            })
            .collect()
    }

    /// Agent configuration described by the `[agent]` section
    ///
    /// A `restUrl` selects the REST variant; otherwise an in-process agent is
    /// described.
    pub fn agent_config(&self) -> AgentConfig {
        let a = &self.agent;
        match &a.rest_url {
            Some(url) => AgentConfig::Rest(RestAgentOptions {
                assets_path: a.assets_path.clone(),
                controller_url: url.clone(),
            }),
            None => AgentConfig::InProcess(AgentOptions {
                assets_path: a.assets_path.clone(),
                label: a.label.clone(),
                http_resolver_urls: a.http_resolver_urls.clone(),
                log_level: a.log_level,
                db_namespace: a.db_namespace.clone(),
                ..AgentOptions::default()
            }),
        }
    }
}

/// Load the harness configuration from a TOML file path
pub fn load_harness_from_toml_path(path: impl AsRef<Path>) -> Result<HarnessFile> {
    let data = fs::read_to_string(&path).map_err(|e| {
        CoreError::ConfigurationError(format!("Failed to read config {:?}: {}", path.as_ref(), e))
    })?;
    load_harness_from_toml_str(&data)
}

/// Load the harness configuration from a TOML string
pub fn load_harness_from_toml_str(input: &str) -> Result<HarnessFile> {
    let cfg: HarnessFile = toml::from_str(input)
        .map_err(|e| CoreError::ConfigurationError(format!("TOML parse error: {}", e)))?;
    cfg.validate()?;
    Ok(cfg)
}
