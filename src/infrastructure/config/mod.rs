//! Configuration loading infrastructure
//!
//! Hierarchical configuration using figment:
//! - Built-in JSLy configuration as the base layer
//! - Project and local YAML overrides
//! - Validation through [`crate::services::ConfigProvider`]

pub mod loader;

pub use loader::{ConfigLoader, CONFIG_DIR, CONFIG_SECTION};
