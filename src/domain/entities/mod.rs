//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! with only small predicate methods on them.
//!
//! # Entity Types
//!
//! - [`ShortMapping`] - A short code mapped to its destination URL
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod mapping;

pub use mapping::ShortMapping;
