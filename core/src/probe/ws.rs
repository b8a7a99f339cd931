//! WebSocket reachability probing

use async_trait::async_trait;
use std::time::Duration;
use tokio_tungstenite::connect_async;
use tracing::debug;

use super::race::race_timeout;
use super::{Probe, ProbeError, Reachable};

/// WebSocket probe that tests the opening handshake
///
/// The connection is dropped as soon as the handshake completes; no frames
/// are exchanged.
///
/// # Example
///
/// ```rust,no_run
/// use lookout_core::probe::{Probe, WsProbe};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let probe = WsProbe::new("ws://127.0.0.1:10092", Duration::from_secs(5), "ws inbound not ready");
/// probe.check().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WsProbe {
    /// WebSocket URL to open
    url: String,
    /// Time allowed for the handshake
    timeout: Duration,
    /// Error text used when the timeout elapses
    timeout_message: String,
}

impl WsProbe {
    /// Create a new WebSocket probe
    pub fn new(url: impl Into<String>, timeout: Duration, timeout_message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout,
            timeout_message: timeout_message.into(),
        }
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for WsProbe {
    async fn check(&self) -> Result<Reachable, ProbeError> {
        debug!("WebSocket probe connecting to {}", self.url);

        let handshake = async {
            match connect_async(self.url.as_str()).await {
                Ok((_stream, response)) => {
                    debug!(
                        "WebSocket probe to {} opened (status {})",
                        self.url,
                        response.status()
                    );
                    // Stream is dropped here, closing the connection
                    Ok(Reachable::WebSocket)
                }
                Err(ws_error) => {
                    debug!("WebSocket probe to {} failed: {}", self.url, ws_error);
                    Err(ProbeError::Connection(ws_error.to_string()))
                }
            }
        };

        race_timeout(self.timeout, &self.timeout_message, handshake).await
    }

    fn url(&self) -> &str {
        &self.url
    }
}
