//! CLI argument parsing

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use walkergen::config::CONFIG_FILENAME;

#[derive(Parser)]
#[command(name = "walkergen")]
#[command(about = "System view attribute walker generator", long_about = None)]
#[command(after_help = "Use 'walkergen <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the generator config
    #[arg(short, long, global = true, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate walkers for all configured views
    #[command(visible_alias = "gen")]
    Generate {
        /// Show what would be written without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Fail if any generated walker is missing or out of date
    Check,

    /// List the enumerated attributes of configured views
    #[command(visible_alias = "ls")]
    List {
        /// Only list this view
        view: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
