//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::allocator_service::AllocatorService`] - Short code allocation
//! - [`services::resolver_service::ResolverService`] - Short code resolution

pub mod services;
