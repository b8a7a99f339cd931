//! Agent configuration assembly and validation

use crate::{CoreError, Result};
use schema::{AgentOptions, BundleVariant, RestAgentOptions};
use serde::Serialize;
use serde_json::{Map, Value};

/// Configuration handed to an agent framework constructor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentConfig {
    /// Agent running inside the framework bundle
    InProcess(AgentOptions),
    /// Agent driven through a REST controller
    Rest(RestAgentOptions),
}

impl AgentConfig {
    /// Bundle flavour that can construct this agent
    pub fn variant(&self) -> BundleVariant {
        match self {
            AgentConfig::InProcess(_) => BundleVariant::Web,
            AgentConfig::Rest(_) => BundleVariant::Rest,
        }
    }

    /// Validate the configuration before it reaches the framework
    pub fn validate(&self) -> Result<()> {
        match self {
            AgentConfig::InProcess(opts) => {
                require_non_empty("assetsPath", &opts.assets_path)?;
                require_non_empty("agent-default-label", &opts.label)?;
                for (i, url) in opts.http_resolver_urls.iter().enumerate() {
                    if !url.starts_with("http") {
                        return Err(CoreError::ValidationError(format!(
                            "http-resolver-url[{}]: '{}' is not an http(s) url",
                            i, url
                        )));
                    }
                }
                if opts.outbound_transport.is_empty() {
                    return Err(CoreError::ValidationError(
                        "outbound-transport: must list at least one transport".to_string(),
                    ));
                }
            }
            AgentConfig::Rest(opts) => {
                require_non_empty("assetsPath", &opts.assets_path)?;
                if !opts.controller_url.starts_with("http") {
                    return Err(CoreError::ValidationError(format!(
                        "agent-rest-url: '{}' is not an http(s) url",
                        opts.controller_url
                    )));
                }
            }
        }
        Ok(())
    }

    /// Render the configuration map exactly as the framework consumes it
    pub fn to_config_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(CoreError::Other(format!(
                "agent config serialized to {} instead of an object",
                other
            ))),
        }
    }
}

impl From<AgentOptions> for AgentConfig {
    fn from(opts: AgentOptions) -> Self {
        AgentConfig::InProcess(opts)
    }
}

impl From<RestAgentOptions> for AgentConfig {
    fn from(opts: RestAgentOptions) -> Self {
        AgentConfig::Rest(opts)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{}: cannot be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_process_map_has_exact_keys() {
        let config = AgentConfig::from(AgentOptions::new("ns", "label", vec![]));
        let map = config.to_config_map().expect("map");

        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "agent-default-label",
                "assetsPath",
                "auto-accept",
                "db-namespace",
                "http-resolver-url",
                "log-level",
                "outbound-transport",
                "transport-return-route",
            ]
        );
        assert_eq!(map["db-namespace"], "ns");
        assert_eq!(map["agent-default-label"], "label");
    }

    #[test]
    fn test_rest_map_has_exact_keys() {
        let config = AgentConfig::from(RestAgentOptions::new("http://localhost:8082"));
        let map = config.to_config_map().expect("map");

        assert_eq!(map.len(), 2);
        assert_eq!(map["agent-rest-url"], "http://localhost:8082");
        assert_eq!(map["assetsPath"], schema::DEFAULT_ASSETS_PATH);
    }

    #[test]
    fn test_variant() {
        assert_eq!(AgentConfig::from(AgentOptions::default()).variant(), BundleVariant::Web);
        assert_eq!(
            AgentConfig::from(RestAgentOptions::new("http://c")).variant(),
            BundleVariant::Rest
        );
    }

    #[test]
    fn test_validation() {
        assert!(AgentConfig::from(AgentOptions::default()).validate().is_ok());

        let mut opts = AgentOptions::default();
        opts.label = "  ".to_string();
        let err = AgentConfig::from(opts).validate().unwrap_err();
        assert!(err.to_string().contains("agent-default-label: cannot be empty"));

        let opts = AgentOptions::new("", "l", vec!["ws://resolver".to_string()]);
        let err = AgentConfig::from(opts).validate().unwrap_err();
        assert!(err.to_string().contains("http-resolver-url[0]"));

        let mut opts = AgentOptions::default();
        opts.outbound_transport.clear();
        assert!(AgentConfig::from(opts).validate().is_err());

        let err = AgentConfig::from(RestAgentOptions::new("ws://controller"))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("agent-rest-url"));
    }
}
