//! Utility functions for code generation and URL processing.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code candidates and shape checks
//! - [`url_sanitizer`] - Tracking parameter removal from target URLs

pub mod code_generator;
pub mod url_sanitizer;
