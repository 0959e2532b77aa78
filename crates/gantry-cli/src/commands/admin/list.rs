//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use gantry_core::query::{Page, ResourceQuery, Sort, SortOrder};
use gantry_core::resource::ResourceRecord;
use gantry_core::traits::ResourceGateway;
use gantry_core::Registry;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource name (docs, users, logs)
    pub resource: String,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Records per page
    #[arg(long, default_value_t = 25)]
    pub per_page: u32,

    /// Sort field
    #[arg(long, default_value = "id")]
    pub sort: String,

    /// Sort direction (asc or desc)
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Filter as field=value (repeatable)
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Backend base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let registry = Registry::builtin();
    let def = registry.resolve(&args.resource).context("Unknown resource")?;

    let (gateway, _) = session::gateway(args.api_url.as_deref())?;

    let page = Page::new(args.page, args.per_page).context("Invalid pagination")?;
    let order = args.order.parse::<SortOrder>().context("Invalid sort order")?;
    let mut query = ResourceQuery::new(page, Sort::new(&args.sort, order));

    for filter in &args.filters {
        let (field, value) = filter
            .split_once('=')
            .context("Filters must look like field=value")?;
        query = query.with_filter(field, value);
    }

    let result = gateway.list(def.name(), &query).await;

    if result.records.is_empty() {
        output::note("No records found.");
        return Ok(());
    }

    for record in &result.records {
        if args.pretty {
            output::json_pretty(record.as_value())?;
            println!();
        } else if def.name() == "logs" {
            match log_line(record) {
                Some(line) => println!("{}", line),
                None => output::json(record.as_value())?,
            }
        } else {
            output::json(record.as_value())?;
        }
    }

    eprintln!();
    eprintln!(
        "{}: {} of {}",
        "Showing".dimmed(),
        result.records.len(),
        result.total
    );

    Ok(())
}

/// Compact one-line rendering for query log records.
fn log_line(record: &ResourceRecord) -> Option<String> {
    let ts = record.get("timestamp")?.as_str()?;
    let user = record.get("user").and_then(Value::as_str).unwrap_or("-");
    let department = record
        .get("department")
        .and_then(Value::as_str)
        .unwrap_or("-");
    let question = record.get("question").and_then(Value::as_str).unwrap_or("");

    Some(format!(
        "{}  {}  {}  {}",
        output::timestamp(ts),
        user,
        department,
        question
    ))
}
