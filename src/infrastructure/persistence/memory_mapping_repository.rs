//! In-memory implementation of the mapping repository.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::entities::ShortMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;

/// Process-local mapping store.
///
/// Backs the `memory` store backend and the HTTP-level tests. The mutex
/// around the map provides the same atomicity for insert-if-absent that
/// the primary key provides in PostgreSQL. Contents do not survive a
/// restart.
pub struct MemoryMappingRepository {
    mappings: Mutex<HashMap<String, ShortMapping>>,
}

impl MemoryMappingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            mappings: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.lock().map_or(0, |mappings| mappings.len())
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, ShortMapping>>, AppError> {
        self.mappings
            .lock()
            .map_err(|_| AppError::store_unavailable("mapping table lock poisoned"))
    }
}

impl Default for MemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn insert_if_absent(&self, mapping: &ShortMapping) -> Result<InsertOutcome, AppError> {
        let mut mappings = self.lock()?;

        match mappings.entry(mapping.code.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(mapping.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortMapping>, AppError> {
        Ok(self.lock()?.get(code).cloned())
    }
}
