//! CLI administration tool for linkcut.
//!
//! Provides commands for managing short mappings, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Inspect a mapping and its click count
//! cargo run --bin admin -- mapping inspect 4f9d21c
//!
//! # Take a short link out of circulation
//! cargo run --bin admin -- mapping deactivate 4f9d21c
//!
//! # Bring it back
//! cargo run --bin admin -- mapping reactivate 4f9d21c
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
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Mapping Management**: Inspect, deactivate, and reactivate short mappings
//! - **Statistics**: View mapping and click counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use linkcut::domain::repositories::MappingRepository;
use linkcut::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
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
    /// Manage short mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// Inspect a mapping and its click count
    Inspect {
        /// Short code to look up
        code: String,
    },

    /// Deactivate a mapping so its short link stops resolving
    Deactivate {
        /// Short code to deactivate
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Reactivate a previously deactivated mapping
    Reactivate {
        /// Short code to reactivate
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Mapping { action } => handle_mapping_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches mapping management commands.
async fn handle_mapping_action(action: MappingAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));

    match action {
        MappingAction::Inspect { code } => {
            inspect_mapping(repo, pool, code).await?;
        }
        MappingAction::Deactivate { code, yes } => {
            deactivate_mapping(repo, pool, code, yes).await?;
        }
        MappingAction::Reactivate { code, yes } => {
            reactivate_mapping(repo, pool, code, yes).await?;
        }
    }

    Ok(())
}

/// Shows a mapping's stored fields and current resolvability.
async fn inspect_mapping(
    repo: Arc<PgMappingRepository>,
    pool: &PgPool,
    code: String,
) -> Result<()> {
    println!("{}", "🔍 Inspect Mapping".bright_blue().bold());
    println!();

    let mapping = repo
        .find_by_code(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Mapping not found")?;

    let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mapping_clicks WHERE code = $1")
        .bind(&mapping.code)
        .fetch_one(pool)
        .await?;

    let now = Utc::now();

    println!("  Code:       {}", mapping.code.cyan());
    println!("  Target:     {}", mapping.target_url.bright_white());
    println!(
        "  Owner:      {}",
        mapping.owner_id.as_deref().unwrap_or("-").bright_black()
    );
    println!(
        "  Created:    {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    match mapping.expires_at {
        Some(expires_at) if now >= expires_at => {
            println!(
                "  Expires:    {} {}",
                expires_at.format("%Y-%m-%d %H:%M"),
                "(expired)".red()
            );
        }
        Some(expires_at) => {
            println!("  Expires:    {}", expires_at.format("%Y-%m-%d %H:%M"));
        }
        None => println!("  Expires:    never"),
    }

    let active = if mapping.active {
        "yes".green()
    } else {
        "no".red()
    };
    println!("  Active:     {}", active);

    let resolvable = if mapping.is_resolvable_at(now) {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };
    println!("  Resolvable: {}", resolvable);

    println!("  Clicks:     {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Deactivates a mapping with a confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Prevents double-deactivation
async fn deactivate_mapping(
    repo: Arc<PgMappingRepository>,
    pool: &PgPool,
    code: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🚫 Deactivate Mapping".bright_blue().bold());
    println!();

    let mapping = repo
        .find_by_code(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Mapping not found")?;

    if !mapping.active {
        println!("{}", "⚠️  This mapping is already inactive".yellow());
        return Ok(());
    }

    println!("  Code:   {}", mapping.code.cyan());
    println!("  Target: {}", mapping.target_url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::query("UPDATE short_mappings SET active = FALSE WHERE code = $1")
        .bind(&mapping.code)
        .execute(pool)
        .await
        .context("Failed to deactivate mapping")?;

    println!();
    println!(
        "{}",
        "✅ Mapping deactivated. The short link now returns 404."
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Reactivates a previously deactivated mapping.
///
/// An expired mapping can be reactivated, but it will stay unresolvable
/// until its expiry is changed in the database.
async fn reactivate_mapping(
    repo: Arc<PgMappingRepository>,
    pool: &PgPool,
    code: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔓 Reactivate Mapping".bright_blue().bold());
    println!();

    let mapping = repo
        .find_by_code(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Mapping not found")?;

    if mapping.active {
        println!("{}", "⚠️  This mapping is already active".yellow());
        return Ok(());
    }

    println!("  Code:   {}", mapping.code.cyan());
    println!("  Target: {}", mapping.target_url.bright_white());

    if mapping.is_expired_at(Utc::now()) {
        println!();
        println!(
            "{}",
            "⚠️  This mapping has expired and will not resolve even when active".yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Reactivate this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::query("UPDATE short_mappings SET active = TRUE WHERE code = $1")
        .bind(&mapping.code)
        .execute(pool)
        .await
        .context("Failed to reactivate mapping")?;

    println!();
    println!("{}", "✅ Mapping reactivated!".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of mappings
/// - Number of currently resolvable mappings
/// - Total number of recorded clicks
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_mappings")
        .fetch_one(pool)
        .await?;

    let resolvable_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM short_mappings WHERE active AND (expires_at IS NULL OR expires_at > now())",
    )
    .fetch_one(pool)
    .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mapping_clicks")
        .fetch_one(pool)
        .await?;

    println!(
        "  Mappings:   {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!(
        "  Resolvable: {}",
        resolvable_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:     {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
