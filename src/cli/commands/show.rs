//! Implementation of the `jsly-config show` command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AppConfig, ExternalLink};
use crate::services::ConfigProvider;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Only print one part of the configuration
    #[arg(long, short, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    All,
    Overview,
    Nav,
    Links,
    Icons,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub section: Section,
    pub config: AppConfig,
}

#[derive(Serialize)]
struct LinkSections<'a> {
    header: &'a [ExternalLink],
    footer: &'a [ExternalLink],
    toc: &'a [ExternalLink],
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let config = &self.config;
        let mut parts = Vec::new();

        if matches!(self.section, Section::All | Section::Overview) {
            parts.push(formatter.format_overview(config));
        }
        if matches!(self.section, Section::All | Section::Nav) {
            parts.push(formatter.format_nav(&config.header.nav));
        }
        if matches!(self.section, Section::All | Section::Links) {
            parts.push(formatter.format_links("header", &config.header.links));
            parts.push(formatter.format_links("footer", &config.footer.links));
            parts.push(formatter.format_links("toc", &config.toc.links));
        }
        if matches!(self.section, Section::All | Section::Icons) {
            parts.push(formatter.format_code_icons(&config.main.code_icon));
        }

        parts.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        let config = &self.config;
        let value = match self.section {
            Section::All | Section::Overview => serde_json::to_value(config),
            Section::Nav => serde_json::to_value(&config.header.nav),
            Section::Links => serde_json::to_value(LinkSections {
                header: &config.header.links,
                footer: &config.footer.links,
                toc: &config.toc.links,
            }),
            Section::Icons => serde_json::to_value(&config.main.code_icon),
        };
        value.unwrap_or_default()
    }
}

pub fn execute(args: &ShowArgs, provider: &ConfigProvider, json_mode: bool) -> Result<()> {
    let output_data = ShowOutput {
        section: args.section,
        config: provider.get_config().clone(),
    };
    output(&output_data, json_mode);
    Ok(())
}
