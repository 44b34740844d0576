//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AllocatorService, ResolverService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::CodeGenerator;

/// Handler-facing application state.
///
/// Cheap to clone: services sit behind `Arc` and the click sender is a
/// channel handle. Handlers never see the repositories directly, only the
/// services built on top of them.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<AllocatorService>,
    pub resolver: Arc<ResolverService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires services onto the given store and code generator.
    pub fn new(
        mappings: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            allocator: Arc::new(AllocatorService::new(Arc::clone(&mappings), generator)),
            resolver: Arc::new(ResolverService::new(mappings)),
            click_sender,
        }
    }
}
