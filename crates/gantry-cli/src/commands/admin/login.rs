//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gantry_core::Credentials;
use gantry_core::traits::SessionStore;
use gantry_http::HttpGateway;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Full name to sign in with
    #[arg(long)]
    pub name: String,

    /// Company email address
    #[arg(long)]
    pub email: String,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let url = session::api_url(args.api_url.as_deref())?;
    let gateway = HttpGateway::new(url);
    let credentials = Credentials::new(&args.name, &args.email);

    eprintln!("{}", "Logging in...".dimmed());

    let new_session = gateway
        .login(&credentials)
        .await
        .context("Failed to login")?;

    session::store()?
        .save(&new_session)
        .context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("Name", &new_session.display_name);
    output::field("Email", &new_session.email_address);
    output::field("Backend", gateway.base().as_str());

    Ok(())
}
