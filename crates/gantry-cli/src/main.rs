//! gantry - CLI for the admin and chat surface of the document backend.
//!
//! This is a thin wrapper over the gantry client libraries, intended
//! for operating the backend without the web front-ends.

mod cli;
mod commands;
mod output;
mod prefs;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    // Display preferences are read once, before any output happens
    prefs::apply_color_preference();

    match cli.command {
        Commands::Admin(cmd) => commands::admin::handle(cmd).await,
        Commands::Chat(cmd) => commands::chat::handle(cmd).await,
        Commands::Config(cmd) => commands::config::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
