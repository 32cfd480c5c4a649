//! CLI administration tool for short.
//!
//! Runs migrations, inspects stored URLs and manages users without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations from MIGRATION_ROOT
//! cargo run --bin short-admin -- migrate
//!
//! # Check database connection
//! cargo run --bin short-admin -- db check
//!
//! # Show a stored URL
//! cargo run --bin short-admin -- url show 220uFicCJj
//!
//! # Register a user and mint a token for them
//! cargo run --bin short-admin -- user add --email alpha@example.com
//! cargo run --bin short-admin -- token issue alpha@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` parts (required)
//! - `MIGRATION_ROOT` (default: `migrations`)
//! - `AUTH_SIGNING_SECRET`, `AUTH_TOKEN_TTL_SECONDS` (for `token issue`, validated
//!   like the server configuration)

use short::application::services::{AuthService, Authenticator};
use short::config::{Config, load_from_env, mask_connection_string};
use short::domain::entities::User;
use short::domain::repositories::{UrlRepository, UserRepository};
use short::infrastructure::persistence::{PgUrlRepository, PgUserRepository};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use std::path::Path;
use std::sync::Arc;

/// CLI tool for managing short.
#[derive(Parser)]
#[command(name = "short-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect stored URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage auth tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum UrlAction {
    /// Show a URL by alias
    Show { alias: String },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a user
    Add {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue an auth token for an existing user
    Issue { email: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Migrate { yes } => migrate(&pool, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
    }

    Ok(())
}

/// Runs the migrations found under `MIGRATION_ROOT`.
async fn migrate(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    let root = Config::load_migration_root();

    println!("{}", "🛠  Run Migrations".bright_blue().bold());
    println!();
    println!("  Source: {}", root.cyan());
    println!();

    let migrator = Migrator::new(Path::new(&root))
        .await
        .with_context(|| format!("Failed to read migrations from '{root}'"))?;

    println!(
        "  Found {} migration(s)",
        migrator.iter().count().to_string().bright_white().bold()
    );

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Apply pending migrations?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    migrator.run(pool).await.context("Migration failed")?;

    println!("{}", "✅ Migrations applied".green().bold());
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
            let urls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user""#)
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  URLs:       {}", urls.to_string().bright_green().bold());
            println!("  Users:      {}", users.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let UrlAction::Show { alias } = action;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let url = repo
        .get_by_alias(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", alias, e))?;

    let owners: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_url_relation WHERE url_alias = $1")
            .bind(&url.alias)
            .fetch_one(pool)
            .await?;

    let fmt_time = |t: Option<chrono::DateTime<Utc>>| {
        t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    println!("{}", "🔗 URL".bright_blue().bold());
    println!();
    println!("  Alias:    {}", url.alias.cyan());
    println!("  Target:   {}", url.original_url.bright_white());
    println!("  Created:  {}", fmt_time(url.created_at).bright_black());
    println!("  Updated:  {}", fmt_time(url.updated_at).bright_black());

    let expiry = fmt_time(url.expire_at);
    if url.is_expired_at(Utc::now()) {
        println!("  Expires:  {} {}", expiry.bright_black(), "EXPIRED".red());
    } else {
        println!("  Expires:  {}", expiry.bright_black());
    }
    println!("  Owners:   {}", owners.to_string().bright_white());
    println!();

    Ok(())
}

/// Registers a user, prompting for missing fields.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let UserAction::Add { email, name } = action;
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    println!("{}", "👤 Add User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.contains('@') {
                    Ok(())
                } else {
                    Err("Not an email address")
                }
            })
            .interact_text()?,
    };

    let name = match name {
        Some(n) => Some(n),
        None => {
            let n: String = Input::new()
                .with_prompt("Name (optional)")
                .allow_empty(true)
                .interact_text()?;
            (!n.is_empty()).then_some(n)
        }
    };

    if repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", "⚠️  A user with this email already exists".yellow());
        return Ok(());
    }

    let user = User {
        name,
        created_at: Some(Utc::now()),
        ..User::with_email(email)
    };

    repo.create(&user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!("{}", "✅ User created".green().bold());
    println!("  Email: {}", user.email.cyan());
    println!();

    Ok(())
}

/// Mints an auth token for an existing user.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let TokenAction::Issue { email } = action;

    let config = load_from_env()?;

    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    let auth = AuthService::new(
        repo,
        config.auth_signing_secret.clone(),
        config.auth_token_ttl()?,
    );
    let token = auth
        .issue_token(&user)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("{}", "🔑 Auth Token".bright_blue().bold());
    println!();
    println!("  User:  {}", user.email.cyan());
    println!("  Token: {}", token.bright_yellow().bold());
    println!("  Valid: {}s", config.auth_token_ttl_seconds.to_string().bright_black());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" -d '{{\"query\":\"{{ viewer {{ email }} }}\"}}' http://localhost:8080/graphql",
        token.bright_yellow()
    );
    println!();

    Ok(())
}
