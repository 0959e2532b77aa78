//! Delete command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use gantry_core::traits::ResourceGateway;
use gantry_core::types::RecordId;
use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resource name (e.g. docs, users)
    pub resource: String,

    /// Record id
    pub id: String,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    if !def.capabilities().deletable {
        bail!("'{}' does not support delete", def.name());
    }

    let id = RecordId::parse(&args.id);

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let deleted = gateway
        .delete(def.name(), &id)
        .await
        .context("Failed to delete record")?;

    output::success(&format!("Deleted {} {}", def.name(), deleted));
    Ok(())
}
