//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use gantry_core::traits::ResourceGateway;
use gantry_core::types::RecordId;
use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource name (e.g. users)
    pub resource: String,

    /// Record id
    pub id: String,

    /// Fields to change, as a JSON object; omitted fields are untouched
    #[arg(long)]
    pub data: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    if !def.capabilities().updatable {
        bail!("'{}' does not support update", def.name());
    }

    let data: Value = serde_json::from_str(&args.data).context("Invalid JSON body")?;
    let id = RecordId::parse(&args.id);

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let updated = gateway
        .update(def.name(), &id, &data)
        .await
        .context("Failed to update record")?;

    output::success("Record updated");
    if args.pretty {
        output::json_pretty(updated.as_value())?;
    } else {
        output::json(updated.as_value())?;
    }

    Ok(())
}
