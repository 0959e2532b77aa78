//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gantry_core::traits::SessionStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    session::store()?
        .clear()
        .context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
