//! In-memory implementation of the click repository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Process-local click sink used by the `memory` store backend and tests.
pub struct MemoryClickRepository {
    events: Mutex<Vec<ClickEvent>>,
}

impl MemoryClickRepository {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far, in arrival order.
    pub fn recorded(&self) -> Vec<ClickEvent> {
        self.events
            .lock()
            .map_or_else(|_| Vec::new(), |events| events.clone())
    }
}

impl Default for MemoryClickRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn record(&self, event: &ClickEvent) -> Result<(), AppError> {
        self.events
            .lock()
            .map_err(|_| AppError::store_unavailable("click log lock poisoned"))?
            .push(event.clone());

        Ok(())
    }
}
