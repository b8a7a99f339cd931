//! Agent framework configuration types
//!
//! These structs serialize to the exact configuration map consumed by the
//! agent framework bundle's constructor. Field names therefore follow the
//! framework's keys (kebab-case, plus `assetsPath`) rather than this crate's
//! usual camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Location of the framework's static assets
pub const DEFAULT_ASSETS_PATH: &str = "/base/public/aries-framework-go/assets";

/// Default agent label
pub const DEFAULT_AGENT_LABEL: &str = "dem-js-agent";

/// Prebuilt framework bundle flavour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BundleVariant {
    /// In-process agent
    Web,
    /// Agent driven through a REST controller
    Rest,
}

impl BundleVariant {
    /// Path the bundle is imported from
    pub fn bundle_path(&self) -> &'static str {
        match self {
            BundleVariant::Web => "/base/node_modules/@hyperledger/aries-framework-go/dist/web/aries.js",
            BundleVariant::Rest => "/base/node_modules/@hyperledger/aries-framework-go/dist/rest/aries.js",
        }
    }
}

/// Outbound transport the agent may use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Ws,
    Http,
}

/// Transport return-route mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReturnRoute {
    None,
    All,
    Thread,
}

impl Default for ReturnRoute {
    fn default() -> Self {
        ReturnRoute::All
    }
}

/// Framework log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

/// Configuration map for an in-process agent
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AgentOptions {
    #[serde(rename = "assetsPath", default = "default_assets_path")]
    pub assets_path: String,

    #[serde(rename = "agent-default-label", default = "default_label")]
    pub label: String,

    /// DID resolver endpoints queried over HTTP
    #[serde(rename = "http-resolver-url", default)]
    pub http_resolver_urls: Vec<String>,

    #[serde(rename = "auto-accept", default = "default_auto_accept")]
    pub auto_accept: bool,

    #[serde(rename = "outbound-transport", default = "default_outbound_transport")]
    pub outbound_transport: Vec<TransportKind>,

    #[serde(rename = "transport-return-route", default)]
    pub transport_return_route: ReturnRoute,

    #[serde(rename = "log-level", default)]
    pub log_level: LogLevel,

    /// Storage namespace isolating this agent's data
    #[serde(rename = "db-namespace", default)]
    pub db_namespace: String,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            assets_path: default_assets_path(),
            label: default_label(),
            http_resolver_urls: Vec::new(),
            auto_accept: default_auto_accept(),
            outbound_transport: default_outbound_transport(),
            transport_return_route: ReturnRoute::default(),
            log_level: LogLevel::default(),
            db_namespace: String::new(),
        }
    }
}

impl AgentOptions {
    /// Options with the given storage namespace, label and resolvers; everything else default
    pub fn new(db_namespace: impl Into<String>, label: impl Into<String>, http_resolver_urls: Vec<String>) -> Self {
        Self {
            label: label.into(),
            http_resolver_urls,
            db_namespace: db_namespace.into(),
            ..Self::default()
        }
    }
}

/// Configuration map for an agent driven through a REST controller
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RestAgentOptions {
    #[serde(rename = "assetsPath", default = "default_assets_path")]
    pub assets_path: String,

    /// Base URL of the controller
    #[serde(rename = "agent-rest-url")]
    pub controller_url: String,
}

impl RestAgentOptions {
    pub fn new(controller_url: impl Into<String>) -> Self {
        Self {
            assets_path: default_assets_path(),
            controller_url: controller_url.into(),
        }
    }
}

fn default_assets_path() -> String {
    DEFAULT_ASSETS_PATH.to_string()
}

fn default_label() -> String {
    DEFAULT_AGENT_LABEL.to_string()
}

const fn default_auto_accept() -> bool {
    true
}

fn default_outbound_transport() -> Vec<TransportKind> {
    vec![TransportKind::Ws, TransportKind::Http]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_map() {
        let value = serde_json::to_value(AgentOptions::default()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "assetsPath": "/base/public/aries-framework-go/assets",
                "agent-default-label": "dem-js-agent",
                "http-resolver-url": [],
                "auto-accept": true,
                "outbound-transport": ["ws", "http"],
                "transport-return-route": "all",
                "log-level": "debug",
                "db-namespace": ""
            })
        );
    }

    #[test]
    fn test_new_keeps_other_defaults() {
        let opts = AgentOptions::new("alice", "alice-agent", vec!["http://resolver/1.0".to_string()]);
        assert_eq!(opts.db_namespace, "alice");
        assert_eq!(opts.label, "alice-agent");
        assert_eq!(opts.http_resolver_urls.len(), 1);
        assert!(opts.auto_accept);
        assert_eq!(opts.transport_return_route, ReturnRoute::All);
        assert_eq!(opts.assets_path, DEFAULT_ASSETS_PATH);
    }

    #[test]
    fn test_rest_options_map() {
        let value = serde_json::to_value(RestAgentOptions::new("http://controller:8082")).expect("serialize");
        assert_eq!(
            value,
            json!({
                "assetsPath": "/base/public/aries-framework-go/assets",
                "agent-rest-url": "http://controller:8082"
            })
        );
    }

    #[test]
    fn test_bundle_paths_differ_by_variant() {
        assert!(BundleVariant::Web.bundle_path().ends_with("/dist/web/aries.js"));
        assert!(BundleVariant::Rest.bundle_path().ends_with("/dist/rest/aries.js"));
    }
}
