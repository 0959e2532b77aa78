//! Stats command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: StatsArgs) -> Result<()> {
    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let stats = gateway.stats().await.context("Failed to fetch stats")?;
    output::json_pretty(&stats)?;

    Ok(())
}
