//! Session persistence and gateway construction for the CLI.

mod store;

pub use store::FileSessionStore;

use anyhow::{Context, Result};

use gantry_core::traits::SessionStore;
use gantry_core::types::ApiUrl;
use gantry_core::Session;
use gantry_http::HttpGateway;

/// Resolve the backend base URL from a CLI flag or the environment.
pub fn api_url(flag: Option<&str>) -> Result<ApiUrl> {
    match flag {
        Some(url) => ApiUrl::new(url).context("Invalid API URL"),
        None => ApiUrl::from_env().context("Invalid API URL in environment"),
    }
}

/// Open the default session store.
pub fn store() -> Result<FileSessionStore> {
    FileSessionStore::default_location().context("Could not determine storage directory")
}

/// Build a gateway, attaching the stored session when present.
pub fn gateway(flag: Option<&str>) -> Result<(HttpGateway, Option<Session>)> {
    let url = api_url(flag)?;
    let session = store()?.load().context("Failed to load session")?;

    let gateway = match &session {
        Some(session) => HttpGateway::with_session(url, session),
        None => HttpGateway::new(url),
    };

    Ok((gateway, session))
}

/// Load the stored session or fail with a login hint.
pub fn require_session() -> Result<Session> {
    store()?
        .load()
        .context("Failed to load session")?
        .context("No active session. Run 'gantry admin login' first.")
}
