//! Export command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Resource to export
    #[arg(default_value = "logs")]
    pub resource: String,

    /// Output path
    #[arg(long, default_value = "query_logs.csv")]
    pub out: PathBuf,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: ExportArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    if !def.capabilities().exportable {
        bail!("'{}' does not have a CSV export", def.name());
    }

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let bytes = gateway
        .export_csv(def.name())
        .await
        .context("Failed to export CSV")?;

    fs::write(&args.out, &bytes)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    output::success(&format!(
        "Saved {} bytes to {}",
        bytes.len(),
        args.out.display()
    ));

    Ok(())
}
