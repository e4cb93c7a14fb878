//! Implementation of the `jsly-config validate` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::services::ConfigProvider;

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub source: String,
    pub title: String,
    pub nav_links: usize,
    pub external_links: usize,
    pub code_icons: usize,
}

impl ValidateOutput {
    pub fn from_provider(provider: &ConfigProvider, source: String) -> Self {
        let config = provider.get_config();
        Self {
            valid: true,
            source,
            title: config.site.title.clone(),
            nav_links: config.header.nav.iter().map(|g| g.links.len()).sum(),
            external_links: config.header.links.len()
                + config.footer.links.len()
                + config.toc.links.len(),
            code_icons: config.main.code_icon.len(),
        }
    }
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        format!(
            "{} configuration is valid\n  source: {}\n  title: {}\n  nav links: {}\n  external links: {}\n  code icons: {}",
            console::style("✓").green(),
            self.source,
            self.title,
            self.nav_links,
            self.external_links,
            self.code_icons,
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Report a successfully loaded configuration.
///
/// Loading already validated the record; failures never reach this point
/// and are reported by the caller's error handler instead.
pub fn execute(provider: &ConfigProvider, source: String, json_mode: bool) -> Result<()> {
    output(&ValidateOutput::from_provider(provider, source), json_mode);
    Ok(())
}
