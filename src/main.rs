//! jsly-config CLI entry point.

use anyhow::Context;
use clap::Parser;

use jsly_config::cli::{commands, handle_error, Cli, Commands};
use jsly_config::infrastructure::logging::LoggerImpl;
use jsly_config::ConfigProvider;

fn main() {
    let cli = Cli::parse();

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => handle_error(&err, cli.json),
    };

    if let Err(err) = run(&cli) {
        handle_error(&err, cli.json);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => commands::init::execute(args, &cli.root, cli.json),
        Commands::Show(args) => commands::show::execute(args, &load(cli)?, cli.json),
        Commands::Validate => commands::validate::execute(&load(cli)?, cli.source_label(), cli.json),
        Commands::Icon(args) => commands::icon::execute(args, &load(cli)?, cli.json),
    }
}

fn load(cli: &Cli) -> anyhow::Result<ConfigProvider> {
    cli.load_config()
        .with_context(|| format!("Failed to load site configuration from {}", cli.source_label()))
}
