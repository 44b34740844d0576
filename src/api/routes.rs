//! API route configuration.

use crate::api::handlers::{create_mapping_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /urls`        - Allocate a short code for a URL
/// - `GET  /urls/{code}` - Resolve a code to its target without redirecting
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_mapping_handler))
        .route("/urls/{code}", get(resolve_handler))
}
