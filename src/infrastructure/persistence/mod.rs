//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits. PostgreSQL
//! repositories use SQLx prepared statements; the in-memory pair backs the
//! `memory` store backend and HTTP-level tests.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] / [`MemoryMappingRepository`] - mapping storage
//! - [`PgClickRepository`] / [`MemoryClickRepository`] - click event storage

pub mod memory_click_repository;
pub mod memory_mapping_repository;
pub mod pg_click_repository;
pub mod pg_mapping_repository;

pub use memory_click_repository::MemoryClickRepository;
pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_mapping_repository::PgMappingRepository;
