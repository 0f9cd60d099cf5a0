//! Kumara API - registry client models
//!
//! This crate provides:
//! - Instance configuration and advertised-instance models
//! - The resolved management metadata value
//! - Input validation utilities

pub mod model;
pub mod validation;

// Re-export commonly used types
pub use model::*;
pub use validation::*;
