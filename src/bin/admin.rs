//! CLI administration tool for the portfolio backend.
//!
//! Provides commands for generating the credentials the server reads from
//! the environment, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Generate a session signing secret
//! cargo run --bin admin -- secret
//!
//! # Hash the admin password (prompts interactively)
//! cargo run --bin admin -- hash-password
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `SESSION_SIGNING_SECRET` (for `hash-password`): HMAC key; prompted for
//!   when absent
//! - `DATABASE_URL` (for `db` commands): PostgreSQL connection string

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use sqlx::PgPool;

use portfolio_backend::application::services::hmac_hex;
use portfolio_backend::utils::token::generate_token;

/// CLI tool for managing the portfolio backend.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a session signing secret
    Secret,

    /// Hash the admin password for ADMIN_PASSWORD_HASH
    HashPassword {
        /// Password value (prompted interactively when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

    match cli.command {
        Commands::Secret => generate_secret(),
        Commands::HashPassword { password } => hash_password(password)?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check().await?,
        },
    }

    Ok(())
}

/// Generates a fresh signing secret and prints the export line.
fn generate_secret() {
    let secret = format!("{}{}", generate_token(), generate_token());

    println!("{}", "Generated signing secret:".bright_white().bold());
    println!();
    println!(
        "  export {}={}",
        "SESSION_SIGNING_SECRET".bright_cyan(),
        secret.bright_yellow()
    );
    println!();
    println!(
        "{}",
        "Changing the secret invalidates the stored password hash; rerun hash-password after."
            .yellow()
    );
}

/// Computes the HMAC of the admin password under the signing secret.
///
/// The server compares login attempts against this value, so it must be
/// regenerated whenever the signing secret changes.
fn hash_password(password: Option<String>) -> Result<()> {
    println!("{}", "Hash admin password".bright_blue().bold());
    println!();

    let secret = match std::env::var("SESSION_SIGNING_SECRET") {
        Ok(s) if !s.is_empty() => s,
        _ => Input::new()
            .with_prompt("Session signing secret")
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let hash = hmac_hex(&secret, &password);

    println!();
    println!("{}", "Add this to your environment:".bright_white().bold());
    println!();
    println!(
        "  export {}={}",
        "ADMIN_PASSWORD_HASH".bright_cyan(),
        hash.bright_yellow()
    );

    Ok(())
}

/// Checks database connectivity.
async fn db_check() -> Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    print!("Connecting... ");
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let row: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await?;
    if row.0 == 1 {
        println!("{}", "ok".green().bold());
    }

    Ok(())
}
