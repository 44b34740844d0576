//! Background worker that persists click events.
//!
//! Click inserts are decoupled from the redirect path: handlers enqueue
//! [`ClickEvent`]s into a bounded channel and this worker drains it, retrying
//! transient store failures with exponential backoff. Events that still fail
//! after the retry budget are dropped and counted, never redelivered.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Base delay of the backoff schedule, in milliseconds.
const RETRY_BASE_DELAY_MS: u64 = 10;

/// Retries after the initial attempt.
const RETRY_ATTEMPTS: usize = 3;

/// Drains `rx`, recording each event through `clicks`.
///
/// Runs until every sender half of the channel is dropped, then returns.
/// One failed event never blocks the queue: after the retry budget the
/// event is abandoned and the worker moves on.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<dyn ClickRepository>,
) {
    while let Some(event) = rx.recv().await {
        match record_with_retry(&clicks, &event).await {
            Ok(()) => debug!(code = %event.code, "click recorded"),
            Err(error) => {
                metrics::counter!("click_records_failed_total").increment(1);
                warn!(code = %event.code, %error, "dropping click event after retries");
            }
        }
    }

    debug!("click channel closed, worker exiting");
}

async fn record_with_retry(
    clicks: &Arc<dyn ClickRepository>,
    event: &ClickEvent,
) -> Result<(), AppError> {
    let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
        .map(jitter)
        .take(RETRY_ATTEMPTS);

    Retry::spawn(strategy, || {
        let clicks = Arc::clone(clicks);
        let event = event.clone();
        async move { clicks.record(&event).await }
    })
    .await
}
