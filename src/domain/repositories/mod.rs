//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Atomic short code reservation and lookup
//! - [`ClickRepository`] - Click event persistence

pub mod click_repository;
pub mod mapping_repository;

pub use click_repository::ClickRepository;
pub use mapping_repository::{InsertOutcome, MappingRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
