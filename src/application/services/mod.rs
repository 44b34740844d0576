//! Business logic services for the application layer.

pub mod allocator_service;
pub mod resolver_service;

pub use allocator_service::{AllocatorService, MAX_ALLOCATION_ATTEMPTS};
pub use resolver_service::ResolverService;
