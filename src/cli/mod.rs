//! Command-line interface for inspecting and validating the site configuration.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::errors::ConfigResult;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};
use crate::services::ConfigProvider;

use commands::icon::IconArgs;
use commands::init::InitArgs;
use commands::show::ShowArgs;

#[derive(Parser, Debug)]
#[command(name = "jsly-config", version, about = "Inspect and validate the JSLy site configuration")]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Load a single configuration file instead of the project layers
    #[arg(long, short, global = true, env = "JSLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory containing `.jsly/`
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON logs to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Rotation policy for files under `--log-dir`
    #[arg(long, global = true, value_enum, default_value_t = RotationPolicy::Daily)]
    pub log_rotation: RotationPolicy,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the validated configuration
    Show(ShowArgs),
    /// Load and validate the configuration
    Validate,
    /// Resolve code block icons for file names or extensions
    Icon(IconArgs),
    /// Write the built-in configuration to `.jsly/config.yaml`
    Init(InitArgs),
}

impl Cli {
    /// Logging settings taken from the global `--log-*` flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            rotation: self.log_rotation,
        }
    }

    /// Load the configuration selected by `--config` / `--root`.
    pub fn load_config(&self) -> ConfigResult<ConfigProvider> {
        match &self.config {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load_from_dir(&self.root),
        }
    }

    /// Human-readable description of where the configuration comes from.
    pub fn source_label(&self) -> String {
        match &self.config {
            Some(path) => path.display().to_string(),
            None => format!("{} (built-in + .jsly layers)", self.root.display()),
        }
    }
}

/// Print an error and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({ "error": err.to_string(), "causes": chain });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
