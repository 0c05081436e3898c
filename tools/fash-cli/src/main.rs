//! FASH-HUB - console store simulator.
//!
//! Commands:
//! - `fash` / `fash shop` - Log in and use the store interactively
//! - `fash config` - Manage configuration

mod commands;
mod config;
mod context;
mod display;
mod logging;
mod output;
mod prompt;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ConfigCommand};

/// FASH-HUB - log in as a manager or customer and run the store
#[derive(Parser)]
#[command(name = "fash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format for listings
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive store (default)
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let writes_config = matches!(
        &cli.command,
        Some(Commands::Config(ConfigArgs {
            command: ConfigCommand::Init { .. }
        }))
    );
    let loaded = if writes_config {
        context::Context::without_config(output.clone())
    } else {
        context::Context::load(cli.config.as_deref(), output.clone())
    };

    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Shop) {
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
