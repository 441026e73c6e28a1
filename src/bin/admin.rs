//! CLI administration tool for shorturl.
//!
//! Inspects and fills the PostgreSQL store without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List stored links
//! cargo run --bin admin -- links list --page 1 --page-size 20
//!
//! # Show where a short code points
//! cargo run --bin admin -- links show 1
//!
//! # Shorten a URL (same DNS validation as the API)
//! cargo run --bin admin -- shorten https://www.example.com/page
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `DNS_TIMEOUT_SECONDS` (optional, used by `shorten`)

use shorturl::config::{Config, load_from_env, mask_connection_string};
use shorturl::domain::repositories::ShortLinkRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgShortLinkRepository;
use shorturl::server::{build_link_service, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Inspect stored links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Shorten a URL
    Shorten {
        /// URL to shorten, stored exactly as given
        url: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List links ordered by short code
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Links per page
        #[arg(short = 's', long, default_value_t = 25, value_parser = clap::value_parser!(i64).range(1..=1000))]
        page_size: i64,
    },

    /// Show the link behind a short code
    Show {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &pool, &config).await?,
        Commands::Shorten { url } => shorten(&url, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgShortLinkRepository> {
    Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone())))
}

/// Dispatches link inspection commands.
async fn handle_links_action(action: LinksAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        LinksAction::List { page, page_size } => list_links(pool, page, page_size).await,
        LinksAction::Show { code } => show_link(pool, config, &code).await,
    }
}

/// Lists links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links (page 1)
///
///   Code    Created            Original URL
///   ───────────────────────────────────────────────────────────────
///   1       2025-01-15 10:30   https://www.example.com/page
/// ```
async fn list_links(pool: &PgPool, page: i64, page_size: i64) -> Result<()> {
    println!(
        "{}",
        format!("📋 Short Links (page {})", page).bright_blue().bold()
    );
    println!();

    let repo = repository(pool);
    let links = repo
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<7} {:<18} {}",
            link.short_url.to_string().cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the original URL behind `code`.
async fn show_link(pool: &PgPool, config: &Config, code: &str) -> Result<()> {
    let service = build_link_service(config, repository(pool));

    match service.resolve(code).await {
        Ok(link) => {
            println!("  Code:     {}", link.short_url.to_string().cyan());
            println!("  URL:      {}", link.original_url);
            println!(
                "  Created:  {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("❌ No link with code {}", code).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to look up link: {}", e)),
    }
}

/// Shortens `url` through the same validation and store flow as the API.
async fn shorten(url: &str, pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let service = build_link_service(config, repository(pool));

    match service.shorten(url).await {
        Ok(link) => {
            println!("  URL:        {}", link.original_url.cyan());
            println!(
                "  Short code: {}",
                link.short_url.to_string().bright_yellow().bold()
            );
            println!();
            println!(
                "  Redirect:   {}",
                format!("/api/shorturl/{}", link.short_url).bright_cyan()
            );
            println!();
            Ok(())
        }
        Err(AppError::InvalidUrl(reason)) => {
            println!("{}", format!("❌ Invalid URL: {}", reason).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repository(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let latest: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(created_at) FROM short_links")
            .fetch_one(pool)
            .await?;

    println!("  Links:        {}", count.to_string().bright_white().bold());
    match latest {
        Some(ts) => println!("  Last created: {}", ts.format("%Y-%m-%d %H:%M")),
        None => println!("  Last created: {}", "never".bright_black()),
    }
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  URL:     {}", mask_connection_string(database_url));
            println!("  Version: {}", version.bright_black());
        }
    }

    Ok(())
}
