//! CLI command implementations.

pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file (fash.toml in the current directory).
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
        /// Where to write it; a `.json` path writes JSON.
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate the config file.
    Validate,
}
