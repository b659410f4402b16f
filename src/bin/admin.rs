//! CLI administration tool for linkcut.
//!
//! Works directly on the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (safe to run repeatedly)
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Inspect one short code
//! cargo run --bin admin -- link aB3dE9
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_PATH`: SQLite location (default: `urls.db`)

use linkcut::config::database_url_from_env;
use linkcut::domain::repositories::UrlRepository;
use linkcut::infrastructure::persistence::{SqliteUrlRepository, connect, init_schema};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing linkcut.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show totals across all short links
    Stats,

    /// Show statistics for one short code
    Link {
        /// The short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the urls table and indexes if missing
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env();
    let pool = connect(&database_url, 1)
        .await
        .with_context(|| format!("Failed to connect to {database_url}"))?;

    let result = match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Link { code } => handle_link(&pool, &code).await,
    };

    pool.close().await;
    result
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Init => {
            println!("{}", "Initializing schema...".bright_blue());

            init_schema(pool).await?;

            println!("{}", "Schema ready".green().bold());
        }
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    let links_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;
    let clicks_count = repo
        .total_clicks()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count clicks: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Displays the mapping behind one short code.
///
/// An unknown code is an error, so the process exits non-zero.
async fn handle_link(pool: &SqlitePool, code: &str) -> Result<()> {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    let Some(mapping) = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    else {
        anyhow::bail!("Short code not found: {code}");
    };

    println!("  Code:    {}", mapping.short_code.cyan());
    println!("  URL:     {}", mapping.long_url.bright_white());
    println!(
        "  Clicks:  {}",
        mapping.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created: {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = false)]
    async fn test_link_unknown_code_fails(pool: SqlitePool) {
        init_schema(&pool).await.unwrap();

        let err = handle_link(&pool, "nope00").await.unwrap_err();
        assert!(err.to_string().contains("nope00"));
    }

    #[sqlx::test(migrations = false)]
    async fn test_link_known_code_succeeds(pool: SqlitePool) {
        init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO urls (short_code, long_url) VALUES (?, ?)")
            .bind("abc123")
            .bind("https://example.com")
            .execute(&pool)
            .await
            .unwrap();

        assert!(handle_link(&pool, "abc123").await.is_ok());
    }
}
