//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::admin::AdminCommand;
use crate::commands::chat::ChatCommand;
use crate::commands::config::ConfigCommand;

/// CLI for the document backend's admin and chat surface.
#[derive(Parser, Debug)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Administrative resource operations
    Admin(AdminCommand),

    /// Chat client operations
    Chat(ChatCommand),

    /// Local preference management
    Config(ConfigCommand),
}
