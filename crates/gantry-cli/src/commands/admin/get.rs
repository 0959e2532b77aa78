//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gantry_core::traits::ResourceGateway;
use gantry_core::types::RecordId;
use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource name (docs, users, logs)
    pub resource: String,

    /// Record id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;
    let id = RecordId::parse(&args.id);

    let record = gateway
        .get_one(def.name(), &id)
        .await
        .context("Failed to fetch record")?;

    if args.pretty {
        output::json_pretty(record.as_value())?;
    } else {
        output::json(record.as_value())?;
    }

    Ok(())
}
