//! Implementation of the `jsly-config icon` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::services::ConfigProvider;

#[derive(Args, Debug)]
pub struct IconArgs {
    /// File names or extensions to resolve (exact match)
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IconResolution {
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IconOutput {
    pub resolutions: Vec<IconResolution>,
}

impl CommandOutput for IconOutput {
    fn to_human(&self) -> String {
        let width = self
            .resolutions
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0);

        self.resolutions
            .iter()
            .map(|r| match &r.icon {
                Some(icon) => format!("{:width$}  {icon}", r.name),
                None => format!("{:width$}  {}", r.name, console::style("(no icon)").dim()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.resolutions).unwrap_or_default()
    }
}

pub fn resolve(provider: &ConfigProvider, names: &[String]) -> IconOutput {
    IconOutput {
        resolutions: names
            .iter()
            .map(|name| IconResolution {
                name: name.clone(),
                icon: provider.code_icon(name).map(str::to_string),
            })
            .collect(),
    }
}

pub fn execute(args: &IconArgs, provider: &ConfigProvider, json_mode: bool) -> Result<()> {
    output(&resolve(provider, &args.names), json_mode);
    Ok(())
}
