//! Short code allocation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::ShortMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_sanitizer::sanitize_url;

/// Candidate codes offered to the store before giving up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 5;

/// Service that allocates short codes for target URLs.
///
/// Uniqueness is delegated entirely to the store: the service draws random
/// candidates and offers each with an atomic insert-if-absent, retrying on
/// conflict. There is no find-then-insert window, so two concurrent
/// allocations can never both claim the same code.
pub struct AllocatorService {
    mappings: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
}

impl AllocatorService {
    /// Creates a new allocator service.
    pub fn new(mappings: Arc<dyn MappingRepository>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            mappings,
            generator,
        }
    }

    /// Allocates a fresh short code for `target_url` and persists the mapping.
    ///
    /// The target is sanitized before storage, so the stored URL may differ
    /// from the submitted one. All timestamps in the returned mapping derive
    /// from a single snapshot taken at the start of the call.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the target is empty or `expires_at`
    ///   is not in the future
    /// - [`AppError::AllocationExhausted`] if every candidate in the attempt
    ///   budget collided
    /// - [`AppError::StoreUnavailable`] on store errors, which abort the
    ///   loop immediately rather than consuming attempts
    pub async fn allocate(
        &self,
        target_url: String,
        owner_id: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortMapping, AppError> {
        if target_url.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Target URL must not be empty",
                json!({}),
            ));
        }

        let now = Utc::now();

        if let Some(expiry) = expires_at {
            if expiry <= now {
                return Err(AppError::invalid_input(
                    "Expiry must be in the future",
                    json!({ "expires_at": expiry.to_rfc3339() }),
                ));
            }
        }

        let target_url = sanitize_url(&target_url);

        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let candidate = self.generator.next_candidate();
            let mapping = ShortMapping::new(
                candidate,
                target_url.clone(),
                owner_id.clone(),
                now,
                expires_at,
                true,
            );

            match self.mappings.insert_if_absent(&mapping).await? {
                InsertOutcome::Inserted => {
                    debug!(code = %mapping.code, attempt, "allocated short code");
                    return Ok(mapping);
                }
                InsertOutcome::Conflict => {
                    metrics::counter!("code_allocation_conflicts_total").increment(1);
                    debug!(code = %mapping.code, attempt, "candidate already taken, retrying");
                }
            }
        }

        metrics::counter!("code_allocation_exhausted_total").increment(1);
        warn!(
            attempts = MAX_ALLOCATION_ATTEMPTS,
            "giving up on short code allocation"
        );

        Err(AppError::allocation_exhausted(MAX_ALLOCATION_ATTEMPTS))
    }
}
