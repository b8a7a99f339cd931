//! Error types for reachability probes

use thiserror::Error;

/// Errors that can end a probe
///
/// Messages are carried as plain strings so that a probe outcome can be
/// cloned, compared and reported without holding on to transport errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The URL's scheme is neither `http` nor `ws`; raised before any I/O
    #[error("unsupported protocol for url: {0}")]
    UnsupportedProtocol(String),

    /// The timer fired before the endpoint answered; carries the caller's message verbatim
    #[error("{0}")]
    Timeout(String),

    /// The HTTP request failed
    #[error("failed to fetch url={url}: {message}")]
    Network { url: String, message: String },

    /// The WebSocket handshake failed; carries the underlying message verbatim
    #[error("{0}")]
    Connection(String),
}

impl ProbeError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            ProbeError::UnsupportedProtocol(_) => "PROBE001",
            ProbeError::Timeout(_) => "PROBE002",
            ProbeError::Network { .. } => "PROBE003",
            ProbeError::Connection(_) => "PROBE004",
        }
    }

    /// Whether the failure was the timer winning the race
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout(_))
    }
}

/// Probe-specific result type
pub type Result<T> = std::result::Result<T, ProbeError>;
