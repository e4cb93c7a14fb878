//! JSLy site configuration
//!
//! The JSLy documentation portal is driven by one immutable configuration
//! record: site metadata, theme, navigation, footer and table-of-contents
//! links, and the file-name to icon table used by code blocks. This crate
//! builds that record, validates it once at startup and exposes it
//! read-only to the rendering layer.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record, its error type
//!   and validation rules
//! - **Service Layer** (`services`): [`ConfigProvider`], the startup-time owner
//! - **Infrastructure Layer** (`infrastructure`): figment-based layered
//!   loading and tracing set-up
//! - **CLI Layer** (`cli`): `jsly-config` command-line interface
//!
//! # Example
//!
//! ```
//! use jsly_config::ConfigProvider;
//!
//! let provider = ConfigProvider::builtin().expect("built-in config is valid");
//! assert_eq!(
//!     provider.code_icon("package.json"),
//!     Some("vscode-icons:file-type-node")
//! );
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AppConfig, AsideConfig, CodeIconMap, ExternalLink, FooterConfig, HeaderConfig, LinkTarget,
    Logo, MainConfig, NavGroup, NavLink, SearchConfig, SiteMeta, Theme, ThemeColor, TocConfig,
};
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::ConfigLoader;
pub use services::ConfigProvider;
