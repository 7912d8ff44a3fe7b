//! Command-line interface definitions.
//!
//! Defines the CLI structure for the coinrelay application using `clap`:
//! run the bot, print one market summary, or check configuration and
//! credentials.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram relay for top cryptocurrency prices
#[derive(Parser, Debug)]
#[command(name = "coinrelay")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the coinrelay CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot (foreground, until Ctrl-C)
    Run(ConfigPathArg),

    /// Fetch current prices once and print the summary
    Prices(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `coinrelay check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
    /// Verify the bot token with Telegram.
    Telegram(ConfigPathArg),
}

/// Shared `--config` argument.
///
/// Without a path, `~/.coinrelay/config.toml` is used when it exists and
/// built-in defaults otherwise.
#[derive(Parser, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
