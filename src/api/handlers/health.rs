//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Well-formed code used to probe the store.
///
/// The probe only cares whether the store answers; both a hit and a
/// NotFound prove connectivity.
const STORE_PROBE_CODE: &str = "0000000";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: resolves a probe code end to end
/// 2. **Click Queue**: checks the channel is open and reports free capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let queue_check = check_click_queue(&state);

    let all_healthy = store_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            click_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store connectivity by running a probe resolution.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.resolver.resolve(STORE_PROBE_CODE).await {
        Ok(_) | Err(AppError::NotFound { .. }) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Store reachable".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}

/// Checks if the click tracking queue is operational.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.click_sender.capacity())),
        }
    }
}
