#![allow(dead_code)]

use chrono::{Duration, Utc};
use linkcut::domain::click_event::ClickEvent;
use linkcut::domain::entities::ShortMapping;
use linkcut::domain::repositories::MappingRepository;
use linkcut::infrastructure::persistence::MemoryMappingRepository;
use linkcut::state::AppState;
use linkcut::utils::code_generator::RandomCodeGenerator;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Builds an app state on the in-memory store.
///
/// Returns the store handle alongside the state so tests can seed
/// mappings and inspect what was persisted.
pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryMappingRepository>,
) {
    create_test_state_with_queue_capacity(100)
}

/// Same as [`create_test_state`] with a custom click queue capacity,
/// for tests that need to fill the queue.
pub fn create_test_state_with_queue_capacity(
    capacity: usize,
) -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryMappingRepository>,
) {
    let store = Arc::new(MemoryMappingRepository::new());
    let (tx, rx) = mpsc::channel(capacity);

    let state = AppState::new(
        store.clone() as Arc<dyn MappingRepository>,
        Arc::new(RandomCodeGenerator),
        tx,
    );

    (state, rx, store)
}

pub async fn seed_mapping(store: &MemoryMappingRepository, code: &str, url: &str) {
    let mapping = ShortMapping::new(
        code.to_string(),
        url.to_string(),
        None,
        Utc::now(),
        None,
        true,
    );
    store.insert_if_absent(&mapping).await.unwrap();
}

pub async fn seed_expired_mapping(store: &MemoryMappingRepository, code: &str, url: &str) {
    let mapping = ShortMapping::new(
        code.to_string(),
        url.to_string(),
        None,
        Utc::now() - Duration::hours(2),
        Some(Utc::now() - Duration::hours(1)),
        true,
    );
    store.insert_if_absent(&mapping).await.unwrap();
}

pub async fn seed_inactive_mapping(store: &MemoryMappingRepository, code: &str, url: &str) {
    let mapping = ShortMapping::new(
        code.to_string(),
        url.to_string(),
        None,
        Utc::now(),
        None,
        false,
    );
    store.insert_if_absent(&mapping).await.unwrap();
}
