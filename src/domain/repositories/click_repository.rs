//! Repository trait for click event persistence.

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording resolved clicks.
///
/// Writes happen off the request path in the click worker, so implementations
/// only need a single append operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - in-process implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors.
    async fn record(&self, event: &ClickEvent) -> Result<(), AppError>;
}
