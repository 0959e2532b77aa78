//! Admin subcommand implementations.

mod analytics;
mod create;
mod delete;
mod export;
mod get;
mod list;
mod login;
mod logout;
mod stats;
mod update;
mod upload;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminSubcommand {
    /// Create a session (login)
    Login(login::LoginArgs),

    /// Clear the stored session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// List records in a resource
    List(list::ListArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// Create a record
    Create(create::CreateArgs),

    /// Partially update a record
    Update(update::UpdateArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),

    /// Ingest files into a department
    Upload(upload::UploadArgs),

    /// Download a resource's CSV export
    Export(export::ExportArgs),

    /// Show dashboard stats
    Stats(stats::StatsArgs),

    /// Show per-department query analytics
    Analytics(analytics::AnalyticsArgs),
}

pub async fn handle(cmd: AdminCommand) -> Result<()> {
    match cmd.command {
        AdminSubcommand::Login(args) => login::run(args).await,
        AdminSubcommand::Logout(args) => logout::run(args).await,
        AdminSubcommand::Whoami(args) => whoami::run(args).await,
        AdminSubcommand::List(args) => list::run(args).await,
        AdminSubcommand::Get(args) => get::run(args).await,
        AdminSubcommand::Create(args) => create::run(args).await,
        AdminSubcommand::Update(args) => update::run(args).await,
        AdminSubcommand::Delete(args) => delete::run(args).await,
        AdminSubcommand::Upload(args) => upload::run(args).await,
        AdminSubcommand::Export(args) => export::run(args).await,
        AdminSubcommand::Stats(args) => stats::run(args).await,
        AdminSubcommand::Analytics(args) => analytics::run(args).await,
    }
}
