//! Endpoint reachability probing
//!
//! This module answers one question: does an endpoint answer before a
//! deadline? It provides HTTP and WebSocket probes that race a single
//! connection attempt against a timer.
//!
//! ## Types
//!
//! - [`Probe`]: The trait shared by probe implementations
//! - [`HttpProbe`]: Single GET request; any response counts
//! - [`WsProbe`]: WebSocket opening handshake
//! - [`Reachable`]: Success value (HTTP response, or nothing for WebSocket)
//! - [`ProbeError`]: Unsupported scheme, timeout, or transport failure
//!
//! ## Retries
//!
//! Every call is exactly one attempt. Polling until an endpoint comes up is
//! left to the caller.

pub mod error;
pub mod http;
pub mod race;
pub mod types;
pub mod ws;

pub use error::ProbeError;
pub use http::HttpProbe;
pub use race::race_timeout;
pub use types::{Probe, Reachable};
pub use ws::WsProbe;

use futures::future::join_all;
use schema::{ProbeKind, ProbeReport, ProbeRequest};
use std::time::{Duration, Instant};
use tracing::debug;

/// Create a probe for a request, choosing the transport from the URL's scheme
///
/// Fails with [`ProbeError::UnsupportedProtocol`] for anything that starts
/// with neither `http` nor `ws`; no timer is started and no I/O happens.
pub fn create_probe(request: &ProbeRequest) -> Result<Box<dyn Probe + Send + Sync>, ProbeError> {
    match request.kind() {
        Some(ProbeKind::Http) => Ok(Box::new(HttpProbe::new(
            request.url.clone(),
            request.timeout(),
            request.timeout_message.clone(),
        ))),
        Some(ProbeKind::WebSocket) => Ok(Box::new(WsProbe::new(
            request.url.clone(),
            request.timeout(),
            request.timeout_message.clone(),
        ))),
        None => Err(ProbeError::UnsupportedProtocol(request.url.clone())),
    }
}

/// Run a single probe described by a request
pub async fn run_probe(request: &ProbeRequest) -> Result<Reachable, ProbeError> {
    let probe = create_probe(request)?;
    probe.check().await
}

/// Probe `url` once, failing with `timeout_message` if it does not answer within `timeout`
///
/// This is the main entry point for test code waiting on an agent's inbound
/// transport.
pub async fn probe(
    url: &str,
    timeout: Duration,
    timeout_message: &str,
) -> Result<Reachable, ProbeError> {
    run_probe(&ProbeRequest::new(url, timeout, timeout_message)).await
}

/// Probe several endpoints concurrently, one attempt each
///
/// Reports are returned in the same order as the requests.
pub async fn probe_all(requests: &[ProbeRequest]) -> Vec<ProbeReport> {
    join_all(requests.iter().map(report_probe)).await
}

/// Run one probe and flatten the outcome into a report
pub async fn report_probe(request: &ProbeRequest) -> ProbeReport {
    let start = Instant::now();
    let outcome = run_probe(request).await;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    let report = match outcome {
        Ok(reachable) => ProbeReport {
            url: request.url.clone(),
            kind: Some(reachable.kind()),
            reachable: true,
            status: reachable.status(),
            error: None,
            elapsed_ms,
        },
        Err(e) => ProbeReport {
            url: request.url.clone(),
            kind: request.kind(),
            reachable: false,
            status: None,
            error: Some(e.to_string()),
            elapsed_ms,
        },
    };
    debug!("probe report for {}: reachable={}", report.url, report.reachable);
    report
}
