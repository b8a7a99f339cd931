//! Core types and traits for reachability probing

use async_trait::async_trait;
use schema::ProbeKind;

use super::ProbeError;

/// Successful probe outcome
#[derive(Debug)]
pub enum Reachable {
    /// The endpoint answered the GET request; the status code is not inspected
    Http(reqwest::Response),
    /// The WebSocket handshake completed
    WebSocket,
}

impl Reachable {
    /// Transport that produced this outcome
    pub fn kind(&self) -> ProbeKind {
        match self {
            Reachable::Http(_) => ProbeKind::Http,
            Reachable::WebSocket => ProbeKind::WebSocket,
        }
    }

    /// HTTP status of the response, if this was an HTTP probe
    pub fn status(&self) -> Option<u16> {
        match self {
            Reachable::Http(response) => Some(response.status().as_u16()),
            Reachable::WebSocket => None,
        }
    }

    /// Take the HTTP response, if any
    pub fn into_response(self) -> Option<reqwest::Response> {
        match self {
            Reachable::Http(response) => Some(response),
            Reachable::WebSocket => None,
        }
    }
}

/// Trait for reachability probe implementations
///
/// Each call is a single attempt bounded by the probe's own timeout.
#[async_trait]
pub trait Probe {
    /// Execute the probe
    async fn check(&self) -> Result<Reachable, ProbeError>;

    /// URL being probed
    fn url(&self) -> &str;
}
