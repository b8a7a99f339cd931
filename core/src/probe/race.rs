//! Single-resolution race between an I/O operation and a timer

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use super::ProbeError;

/// Run `operation` against a timer of `timeout`.
///
/// Whichever settles first decides the outcome. If the timer fires first the
/// operation is dropped unfinished and `ProbeError::Timeout(timeout_message)`
/// is returned. Otherwise the operation's own result is returned and the
/// timer is dropped, so it can never fire after the outcome is decided.
pub async fn race_timeout<F, T>(
    timeout: Duration,
    timeout_message: &str,
    operation: F,
) -> Result<T, ProbeError>
where
    F: Future<Output = Result<T, ProbeError>>,
{
    let timer = sleep(timeout);
    tokio::pin!(timer);
    tokio::pin!(operation);

    tokio::select! {
        // Poll the operation first so an answer that is ready together with the timer wins.
        biased;
        outcome = &mut operation => {
            debug!("operation settled before {:?}, cancelling timer", timeout);
            outcome
        }
        () = &mut timer => {
            debug!("timer fired after {:?}: {}", timeout, timeout_message);
            Err(ProbeError::Timeout(timeout_message.to_string()))
        }
    }
}
