//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gantry_core::traits::SessionStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let stored = session::store()?
        .load()
        .context("Failed to load session")?;

    match stored {
        Some(active) => {
            output::field("Name", &active.display_name);
            output::field("Email", &active.email_address);
        }
        None => {
            output::note("No active session. Run 'gantry admin login' first.");
        }
    }

    Ok(())
}
