//! Analytics command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: AnalyticsArgs) -> Result<()> {
    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let analytics = gateway
        .queries_per_department()
        .await
        .context("Failed to fetch analytics")?;
    output::json_pretty(&analytics)?;

    Ok(())
}
