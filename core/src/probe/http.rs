//! HTTP reachability probing

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::race::race_timeout;
use super::{Probe, ProbeError, Reachable};

/// HTTP probe that issues a single GET request
///
/// Any response counts as reachable, including 4xx and 5xx statuses: an
/// inbound transport endpoint typically answers a plain GET with
/// `405 Method Not Allowed`, which still proves it is listening.
///
/// # Example
///
/// ```rust,no_run
/// use lookout_core::probe::{HttpProbe, Probe};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let probe = HttpProbe::new(
///     "http://127.0.0.1:10091",
///     Duration::from_secs(5),
///     "http inbound transport not ready",
/// );
///
/// let reachable = probe.check().await?;
/// println!("endpoint answered with {:?}", reachable.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProbe {
    /// URL to request
    url: String,
    /// Time allowed for the response
    timeout: Duration,
    /// Error text used when the timeout elapses
    timeout_message: String,
    client: Client,
}

impl HttpProbe {
    /// Create a new HTTP probe with its own client
    pub fn new(url: impl Into<String>, timeout: Duration, timeout_message: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url, timeout, timeout_message)
    }

    /// Create a new HTTP probe sharing an existing client
    pub fn with_client(
        client: Client,
        url: impl Into<String>,
        timeout: Duration,
        timeout_message: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            timeout,
            timeout_message: timeout_message.into(),
            client,
        }
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self) -> Result<Reachable, ProbeError> {
        debug!("HTTP probe requesting {}", self.url);

        let request = async {
            self.client
                .get(&self.url)
                .send()
                .await
                .map(Reachable::Http)
                .map_err(|e| {
                    debug!("HTTP probe to {} failed: {}", self.url, e);
                    ProbeError::Network {
                        url: self.url.clone(),
                        message: e.to_string(),
                    }
                })
        };

        let reachable = race_timeout(self.timeout, &self.timeout_message, request).await?;
        debug!("HTTP probe to {} returned status {:?}", self.url, reachable.status());
        Ok(reachable)
    }

    fn url(&self) -> &str {
        &self.url
    }
}
