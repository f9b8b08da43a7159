//! Walker generator CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkergen::Config;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            walkergen::errors::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!(
                    "Make sure '{}' exists and lists the views to generate",
                    cli.config.display()
                ),
            );
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Generate { dry_run } => generate_walkers(&config, dry_run),
        Commands::Check => check_walkers(&config),
        Commands::List { view, format } => list_attributes(&config, view.as_deref(), &format),
    };

    if let Err(e) = result {
        walkergen::errors::print_error("Command failed", &e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
