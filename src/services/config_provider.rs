//! Startup-time provider for the validated site configuration.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::errors::ConfigResult;
use crate::domain::models::AppConfig;
use crate::domain::validation;

/// Owns the one immutable [`AppConfig`] for the life of the process.
///
/// Construction validates the record and fails fast; after that the
/// configuration is read-only, so clones of the provider (or of the
/// [`Arc`] returned by [`ConfigProvider::shared`]) may be read from any
/// number of threads without locking.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    config: Arc<AppConfig>,
}

impl ConfigProvider {
    /// Validate `config` and wrap it.
    pub fn new(config: AppConfig) -> ConfigResult<Self> {
        if let Err(err) = validation::validate(&config) {
            error!(field = err.field(), reason = err.reason(), "site configuration rejected");
            return Err(err);
        }

        info!(
            title = %config.site.title,
            nav_groups = config.header.nav.len(),
            header_links = config.header.links.len(),
            code_icons = config.main.code_icon.len(),
            "site configuration validated"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Provider over the built-in JSLy configuration.
    pub fn builtin() -> ConfigResult<Self> {
        Self::new(AppConfig::jsly())
    }

    /// The validated configuration.
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared handle for consumers that outlive the provider.
    pub fn shared(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Icon for an exact file name or extension, if one is configured.
    pub fn code_icon(&self, name: &str) -> Option<&str> {
        self.config.main.code_icon.resolve(name)
    }
}
