//! Config subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::output;
use crate::prefs::{ColorMode, Preferences};

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Set the color output mode
    Color(ColorArgs),

    /// Show current preferences
    Show(ShowArgs),
}

pub async fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Color(args) => run_color(args),
        ConfigSubcommand::Show(args) => run_show(args),
    }
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Color mode
    #[arg(value_enum)]
    pub mode: ColorMode,
}

fn run_color(args: ColorArgs) -> Result<()> {
    let mut prefs = Preferences::load_default().context("Failed to load preferences")?;
    prefs.color = args.mode;
    prefs.save_default().context("Failed to save preferences")?;

    output::success("Preferences saved");
    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowArgs {}

fn run_show(_args: ShowArgs) -> Result<()> {
    let prefs = Preferences::load_default().context("Failed to load preferences")?;
    output::json_pretty(&prefs)
}
