//! Sections of the harness configuration file
//!
//! ```toml
//! [probe]
//! timeoutMs = 5000
//! timeoutMessage = "endpoint did not become reachable"
//!
//! [agent]
//! label = "alice"
//! dbNamespace = "alice"
//!
//! [[endpoints]]
//! url = "ws://localhost:10092"
//! timeoutMs = 2000
//! ```

use crate::agent::{LogLevel, DEFAULT_AGENT_LABEL, DEFAULT_ASSETS_PATH};
use crate::probe::{DEFAULT_TIMEOUT_MESSAGE, DEFAULT_TIMEOUT_MS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Defaults applied to endpoints that do not set their own timeout values
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeDefaults {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_timeout_message")]
    pub timeout_message: String,
}

impl Default for ProbeDefaults {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            timeout_message: default_timeout_message(),
        }
    }
}

/// An endpoint to probe
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub url: String,

    /// Overrides `probe.timeoutMs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Overrides `probe.timeoutMessage`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_message: Option<String>,
}

/// Agent defaults used when building agent configuration maps
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentSection {
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default)]
    pub db_namespace: String,

    #[serde(default)]
    pub http_resolver_urls: Vec<String>,

    #[serde(default = "default_assets_path")]
    pub assets_path: String,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Controller URL; when set, the REST variant is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_url: Option<String>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            label: default_label(),
            db_namespace: String::new(),
            http_resolver_urls: Vec::new(),
            assets_path: default_assets_path(),
            log_level: LogLevel::default(),
            rest_url: None,
        }
    }
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_timeout_message() -> String {
    DEFAULT_TIMEOUT_MESSAGE.to_string()
}

fn default_label() -> String {
    DEFAULT_AGENT_LABEL.to_string()
}

fn default_assets_path() -> String {
    DEFAULT_ASSETS_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_parse_from_toml() {
        #[derive(Deserialize)]
        struct File {
            #[serde(default)]
            probe: ProbeDefaults,
            #[serde(default)]
            agent: AgentSection,
            #[serde(default)]
            endpoints: Vec<Endpoint>,
        }

        let input = r#"
        [probe]
        timeoutMs = 250

        [agent]
        dbNamespace = "bob"
        logLevel = "warning"

        [[endpoints]]
        url = "http://localhost:10091"

        [[endpoints]]
        url = "ws://localhost:10092"
        timeoutMessage = "ws not ready"
        "#;
        let file: File = toml::from_str(input).expect("should parse");

        assert_eq!(file.probe.timeout_ms, 250);
        assert_eq!(file.probe.timeout_message, DEFAULT_TIMEOUT_MESSAGE);
        assert_eq!(file.agent.db_namespace, "bob");
        assert_eq!(file.agent.label, DEFAULT_AGENT_LABEL);
        assert_eq!(file.agent.log_level, LogLevel::Warning);
        assert_eq!(file.endpoints.len(), 2);
        assert_eq!(file.endpoints[0].timeout_ms, None);
        assert_eq!(file.endpoints[1].timeout_message.as_deref(), Some("ws not ready"));
    }
}
