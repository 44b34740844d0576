//! DTOs for the mapping endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortMapping;

/// Request to allocate a short code for a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, message = "originalUrl must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional expiry timestamp. Must lie in the future.
    pub expires_at: Option<DateTime<Utc>>,

    /// Optional opaque owner identifier, stored for attribution.
    pub owner_id: Option<String>,
}

/// Response for a freshly allocated mapping.
///
/// `original_url` echoes the stored target, which may differ from the
/// submitted URL after sanitization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingResponse {
    pub code: String,
    pub original_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub active: bool,
}

impl From<ShortMapping> for CreateMappingResponse {
    fn from(mapping: ShortMapping) -> Self {
        Self {
            code: mapping.code,
            original_url: mapping.target_url,
            expires_at: mapping.expires_at,
            active: mapping.active,
        }
    }
}

/// Response for a code lookup without redirect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub original_url: String,
}
