//! Apply the embedded database migrations and exit.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use lunchmate::outbound::persistence::run_pending_migrations;

/// `lunchmate-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lunchmate-migrate",
    about = "Apply pending lunchmate schema migrations",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `LUNCHMATE_DATABASE_URL`, then
    /// `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url)?;
    let applied = run_pending_migrations(&database_url).wrap_err("migration run failed")?;
    if applied.is_empty() {
        println!("schema is up to date");
    } else {
        for version in applied {
            println!("applied {version}");
        }
    }
    Ok(())
}

fn resolve_database_url(cli_value: Option<String>) -> Result<String> {
    cli_value
        .or_else(|| env::var("LUNCHMATE_DATABASE_URL").ok())
        .or_else(|| env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| eyre!("no database URL: pass --database-url or set LUNCHMATE_DATABASE_URL"))
}
