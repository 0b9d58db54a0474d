//! gradebook-auth CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use gradebook_auth::cli::{commands, handle_error, Cli, Commands};
use gradebook_auth::infrastructure::logging::LoggerImpl;
use gradebook_auth::{Config, ConfigLoader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => commands::init::execute(force, cli.json),
        Commands::Login(args) => {
            let (config, _logger) = setup(config_path)?;
            commands::login::execute(args, &config, cli.json).await
        }
        Commands::Register(args) => {
            let (config, _logger) = setup(config_path)?;
            commands::register::execute(args, &config, cli.json).await
        }
        Commands::Token { header } => {
            let (config, _logger) = setup(config_path)?;
            commands::token::execute(header, &config, cli.json).await
        }
    }
}

/// Load configuration and install the global subscriber
fn setup(config_path: Option<&Path>) -> Result<(Config, LoggerImpl)> {
    let config = ConfigLoader::load_with(config_path)?;
    let logger = LoggerImpl::init(&config.logging)?;
    Ok((config, logger))
}
