//! Handlers for mapping allocation and lookup.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::urls::{CreateMappingRequest, CreateMappingResponse, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Allocates a short code for a URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Example
///
/// ```json
/// {
///   "originalUrl": "https://example.com/page?utm_source=ads&id=5",
///   "expiresAt": "2027-01-01T00:00:00Z",
///   "ownerId": "user-17"
/// }
/// ```
///
/// The response echoes the stored target, with tracking parameters
/// already stripped.
///
/// # Errors
///
/// - **400 Bad Request**: malformed URL, empty URL, or expiry in the past
/// - **503 Service Unavailable**: code space too crowded or store down
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMappingRequest>,
) -> Result<(StatusCode, Json<CreateMappingResponse>), AppError> {
    payload.validate()?;

    let mapping = state
        .allocator
        .allocate(payload.original_url, payload.owner_id, payload.expires_at)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMappingResponse::from(mapping)),
    ))
}

/// Resolves a short code to its target without redirecting.
///
/// # Endpoint
///
/// `GET /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown, revoked and expired codes alike.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let mapping = state.resolver.resolve(&code).await?;

    Ok(Json(ResolveResponse {
        original_url: mapping.target_url,
    }))
}
