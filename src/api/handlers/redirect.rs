//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped and counted; the redirect
/// itself never waits on the click store.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, revoked or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.resolver.resolve(&code).await?;

    let click_event = ClickEvent::new(
        mapping.code.clone(),
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    if state.click_sender.try_send(click_event).is_err() {
        metrics::counter!("click_events_dropped_total").increment(1);
        debug!(code = %mapping.code, "click queue full, dropping event");
    }

    Ok(Redirect::temporary(&mapping.target_url))
}
