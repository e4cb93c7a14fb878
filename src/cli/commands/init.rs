//! Implementation of the `jsly-config init` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AppConfig;
use crate::infrastructure::config::{ConfigLoader, CONFIG_DIR};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing `.jsly/config.yaml`
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to `--root`)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.success {
            format!("{}\n  {}", self.message, self.config_path.display())
        } else {
            self.message.clone()
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Write the built-in configuration under `args.path`, or under `root`
/// when no path was given.
pub fn write_config(args: &InitArgs, root: &Path) -> Result<InitOutput> {
    let target = args.path.as_deref().unwrap_or(root);
    let config_dir = target.join(CONFIG_DIR);
    let config_path = config_dir.join("config.yaml");

    if config_path.exists() && !args.force {
        return Ok(InitOutput {
            success: false,
            message: "Configuration already exists. Use --force to overwrite.".to_string(),
            config_path,
        });
    }

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let yaml = ConfigLoader::render_yaml(&AppConfig::jsly())
        .context("Failed to serialize built-in configuration")?;
    fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!(path = %config_path.display(), "wrote site configuration");

    Ok(InitOutput {
        success: true,
        message: "Wrote built-in JSLy configuration".to_string(),
        config_path,
    })
}

pub fn execute(args: &InitArgs, root: &Path, json_mode: bool) -> Result<()> {
    let output_data = write_config(args, root)?;
    output(&output_data, json_mode);
    Ok(())
}
