//! Infrastructure layer module
//!
//! - Configuration loading (figment layering over YAML files)
//! - Logging infrastructure (tracing subscriber set-up)

pub mod config;
pub mod logging;
