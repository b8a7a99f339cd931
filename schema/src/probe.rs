//! Reachability probe request and report types
//!
//! A probe is a single attempt to determine whether an endpoint is reachable.
//! The URL's scheme prefix decides which transport is used:
//! - `http` (and therefore `https`): one GET request
//! - `ws` (and therefore `wss`): one WebSocket opening handshake

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default probe timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default message used when a probe times out
pub const DEFAULT_TIMEOUT_MESSAGE: &str = "timed out waiting for endpoint to become reachable";

/// Transport used to probe an endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProbeKind {
    /// HTTP(S) GET request
    Http,
    /// WebSocket opening handshake
    WebSocket,
}

impl ProbeKind {
    /// Detect the probe kind from a URL's scheme prefix.
    ///
    /// Returns `None` for anything that starts with neither `http` nor `ws`.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("http") {
            Some(ProbeKind::Http)
        } else if url.starts_with("ws") {
            Some(ProbeKind::WebSocket)
        } else {
            None
        }
    }

    /// Short label used in human-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Http => "http",
            ProbeKind::WebSocket => "ws",
        }
    }
}

/// A single reachability probe
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRequest {
    /// Endpoint to probe; the scheme prefix selects the transport
    pub url: String,

    /// Time allowed for the endpoint to answer, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Error text reported verbatim when the timeout elapses
    #[serde(default = "default_timeout_message")]
    pub timeout_message: String,
}

impl ProbeRequest {
    /// Create a probe request from a `Duration` timeout
    pub fn new(url: impl Into<String>, timeout: Duration, timeout_message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            timeout_message: timeout_message.into(),
        }
    }

    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Probe kind implied by the URL, if the scheme is supported
    pub fn kind(&self) -> Option<ProbeKind> {
        ProbeKind::from_url(&self.url)
    }
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_timeout_message() -> String {
    DEFAULT_TIMEOUT_MESSAGE.to_string()
}

/// Result of one probe, flattened for display and JSON output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    /// Probed URL
    pub url: String,

    /// Transport used; absent when the scheme was not supported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProbeKind>,

    /// Whether the endpoint answered before the timeout
    pub reachable: bool,

    /// HTTP status code of the response (HTTP probes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Failure description when not reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock time spent on the probe
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_url() {
        assert_eq!(ProbeKind::from_url("http://localhost:8080"), Some(ProbeKind::Http));
        assert_eq!(ProbeKind::from_url("https://example.com"), Some(ProbeKind::Http));
        assert_eq!(ProbeKind::from_url("ws://localhost:10092"), Some(ProbeKind::WebSocket));
        assert_eq!(ProbeKind::from_url("wss://example.com/ws"), Some(ProbeKind::WebSocket));

        assert_eq!(ProbeKind::from_url("tcp://localhost:80"), None);
        assert_eq!(ProbeKind::from_url("localhost:8080"), None);
        assert_eq!(ProbeKind::from_url(""), None);
        // Prefix match is case-sensitive
        assert_eq!(ProbeKind::from_url("HTTP://localhost"), None);
    }

    #[test]
    fn test_request_timeout_conversion() {
        let req = ProbeRequest::new("ws://localhost:1", Duration::from_millis(250), "too slow");
        assert_eq!(req.timeout_ms, 250);
        assert_eq!(req.timeout(), Duration::from_millis(250));
        assert_eq!(req.kind(), Some(ProbeKind::WebSocket));
    }

    #[test]
    fn test_request_defaults_from_json() {
        let req: ProbeRequest = serde_json::from_str(r#"{"url":"http://localhost:1"}"#)
            .expect("should deserialize");
        assert_eq!(req.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(req.timeout_message, DEFAULT_TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_report_skips_absent_fields() {
        let report = ProbeReport {
            url: "ws://localhost:1".to_string(),
            kind: Some(ProbeKind::WebSocket),
            reachable: true,
            status: None,
            error: None,
            elapsed_ms: 3,
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["kind"], "webSocket");
        assert_eq!(json["elapsedMs"], 3);
        assert!(json.get("status").is_none());
        assert!(json.get("error").is_none());
    }
}
