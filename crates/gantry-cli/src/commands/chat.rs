//! Chat subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use gantry_http::{ChatPrompt, HttpGateway};

use crate::session;

#[derive(Args, Debug)]
pub struct ChatCommand {
    #[command(subcommand)]
    pub command: ChatSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChatSubcommand {
    /// Ask a question against a department knowledge base
    Send(SendArgs),

    /// Show the welcome banner
    Welcome(WelcomeArgs),
}

pub async fn handle(cmd: ChatCommand) -> Result<()> {
    match cmd.command {
        ChatSubcommand::Send(args) => run_send(args).await,
        ChatSubcommand::Welcome(args) => run_welcome(args).await,
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// The question to ask
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Department knowledge base to ask against
    #[arg(long)]
    pub department: String,

    /// Answer language code (e.g. en, hi)
    #[arg(long)]
    pub language: Option<String>,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run_send(args: SendArgs) -> Result<()> {
    let active = session::require_session()?;
    let url = session::api_url(args.api_url.as_deref())?;
    let gateway = HttpGateway::with_session(url, &active);

    let prompt = ChatPrompt {
        user: active.token.as_str().to_string(),
        department: args.department.clone(),
        query: args.query.join(" "),
        language: args.language.clone(),
    };

    eprintln!("{}", "Thinking...".dimmed());

    let reply = gateway
        .chat(&prompt)
        .await
        .context("Failed to contact the chat backend")?;

    let stamp = chrono::Local::now().format("%H:%M");
    println!("{} {}", format!("[{}]", stamp).dimmed(), reply.answer);

    Ok(())
}

#[derive(Args, Debug)]
pub struct WelcomeArgs {
    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run_welcome(args: WelcomeArgs) -> Result<()> {
    let url = session::api_url(args.api_url.as_deref())?;
    let gateway = HttpGateway::new(url);

    let welcome = gateway
        .welcome()
        .await
        .context("Failed to fetch welcome banner")?;

    println!("{}", welcome.title.bold());
    println!("{}", welcome.subtitle);
    println!("{}", welcome.greeting);

    Ok(())
}
