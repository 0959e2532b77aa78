//! Upload command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use gantry_core::resource::UploadJob;
use gantry_core::traits::ResourceGateway;

use crate::output;
use crate::session;

/// Ingested files land in the documents collection.
const TARGET_RESOURCE: &str = "docs";

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Files to ingest
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Target department
    #[arg(long)]
    pub department: String,

    /// Document title (defaults to each file's name)
    #[arg(long)]
    pub title: Option<String>,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: UploadArgs) -> Result<()> {
    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let mut uploaded = 0usize;
    let mut failed = 0usize;

    // One request per file; outcomes are reported individually
    for path in &args.files {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .with_context(|| format!("Invalid file name: {}", path.display()))?;

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        let job = UploadJob {
            title: args.title.clone().unwrap_or_else(|| file_name.clone()),
            department: args.department.clone(),
            file_name: file_name.clone(),
            bytes,
        };

        match gateway.upload(TARGET_RESOURCE, &job).await {
            Ok(_) => {
                uploaded += 1;
                output::success(&format!("Uploaded {}", file_name));
            }
            Err(err) => {
                failed += 1;
                output::error(&format!("Failed to upload {}: {}", file_name, err));
            }
        }
    }

    println!();
    output::field("Uploaded", &uploaded.to_string());
    if failed > 0 {
        output::field("Failed", &failed.to_string());
    }

    if uploaded == 0 && failed > 0 {
        bail!("All uploads failed");
    }

    Ok(())
}
