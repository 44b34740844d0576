//! Short code resolution service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::ShortMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_code;

/// Service that resolves short codes to their stored mappings.
///
/// Resolution applies the serving policy on top of raw lookup: a mapping is
/// only returned while it is active and unexpired. Absent, revoked and
/// expired codes all produce the same [`AppError::NotFound`], so a caller
/// cannot tell whether a code was ever allocated.
pub struct ResolverService {
    mappings: Arc<dyn MappingRepository>,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(mappings: Arc<dyn MappingRepository>) -> Self {
        Self { mappings }
    }

    /// Resolves `code` against the current wall clock.
    pub async fn resolve(&self, code: &str) -> Result<ShortMapping, AppError> {
        self.resolve_at(code, Utc::now()).await
    }

    /// Resolves `code` as of the instant `now`.
    ///
    /// The expiry comparison uses `now` for the entire call, so a mapping
    /// expiring mid-request cannot be judged twice with different answers.
    /// Codes the generator could never have produced are rejected without
    /// touching the store.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown, revoked or expired
    /// - [`AppError::StoreUnavailable`] on store errors, which are
    ///   propagated rather than masked as missing mappings
    pub async fn resolve_at(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<ShortMapping, AppError> {
        if !is_well_formed_code(code) {
            return Err(Self::not_found(code));
        }

        match self.mappings.find_by_code(code).await? {
            Some(mapping) if mapping.is_resolvable_at(now) => Ok(mapping),
            Some(mapping) => {
                debug!(
                    code,
                    active = mapping.active,
                    expired = mapping.is_expired_at(now),
                    "mapping exists but is not servable"
                );
                Err(Self::not_found(code))
            }
            None => Err(Self::not_found(code)),
        }
    }

    fn not_found(code: &str) -> AppError {
        AppError::not_found("Short link not found", json!({ "code": code }))
    }
}
