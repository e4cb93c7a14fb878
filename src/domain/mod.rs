//! Domain layer for the JSLy site configuration
//!
//! This module contains the configuration record, its error type and the
//! rules a record must satisfy before it is handed to the rendering layer.

pub mod errors;
pub mod models;
pub mod validation;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
