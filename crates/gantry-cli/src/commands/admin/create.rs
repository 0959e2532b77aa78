//! Create command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use gantry_core::traits::ResourceGateway;
use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resource name (e.g. users)
    pub resource: String,

    /// Record body as a JSON object
    #[arg(long)]
    pub data: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    if !def.capabilities().creatable {
        bail!(
            "'{}' does not support direct create (documents are ingested via 'gantry admin upload')",
            def.name()
        );
    }

    let data: Value = serde_json::from_str(&args.data).context("Invalid JSON body")?;

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let created = gateway
        .create(def.name(), &data)
        .await
        .context("Failed to create record")?;

    output::success("Record created");
    if args.pretty {
        output::json_pretty(created.as_value())?;
    } else {
        output::json(created.as_value())?;
    }

    Ok(())
}
