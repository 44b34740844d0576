//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`           - Short link redirect (public)
//! - `GET  /health`           - Health check: store, click queue (public)
//! - `POST /api/urls`         - Allocate a short code
//! - `GET  /api/urls/{code}`  - Resolve a code without redirecting
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The redirect route carries no rate limiter so resolution stays on the
/// fast path; the allocation API does.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_router = if behind_proxy {
        api::routes::api_routes().layer(rate_limit::proxied_layer())
    } else {
        api::routes::api_routes().layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
