//! Repository trait for short mapping data access.

use crate::domain::entities::ShortMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an insert-if-absent offer.
///
/// A conflict is an expected outcome of candidate probing, not an error, so
/// it travels in the `Ok` channel and never aborts an allocation by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was persisted and now owns its code.
    Inserted,
    /// Another mapping already owns the code; nothing was written.
    Conflict,
}

/// Repository interface for short mappings.
///
/// The whole allocation scheme rests on `insert_if_absent` being atomic:
/// of any number of concurrent offers for the same code, exactly one may
/// observe [`InsertOutcome::Inserted`]. A check-then-insert implementation
/// would break that guarantee under races.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Atomically persists the mapping unless its code is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(InsertOutcome::Inserted)` if the mapping was stored
    /// - `Ok(InsertOutcome::Conflict)` if the code is already in use
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors.
    async fn insert_if_absent(&self, mapping: &ShortMapping) -> Result<InsertOutcome, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// Lookup ignores resolution policy: revoked and expired mappings are
    /// returned as-is, callers decide what to do with them.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortMapping>, AppError>;
}
