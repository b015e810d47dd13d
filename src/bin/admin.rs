//! CLI administration tool for hotel-listing.
//!
//! Provides commands for managing accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for missing values)
//! cargo run --bin admin -- user create --email admin@example.com --admin
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Grant the Administrator role
//! cargo run --bin admin -- user promote admin@example.com
//!
//! # Load the sample countries and hotels
//! cargo run --bin admin -- db seed
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
//! - **Account Management**: Create, list, and promote accounts
//! - **Statistics**: Country, hotel and account counts
//! - **Database Tools**: Connection checks, info queries and sample data
//! - **Interactive Prompts**: Password entry with confirmation

use hotel_listing::domain::entities::{NewApiUser, NewCountry, NewHotel, Role};
use hotel_listing::domain::repositories::UserRepository;
use hotel_listing::infrastructure::persistence::{PgUserRepository, UnitOfWork};
use hotel_listing::infrastructure::security::PasswordHasher;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing hotel-listing.
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
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Grant the Administrator role as well as User
        #[arg(long)]
        admin: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Grant the Administrator role to an existing account
    Promote {
        /// Account email
        email: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Insert the sample countries and hotels into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create {
            email,
            first_name,
            last_name,
            admin,
            yes,
        } => create_user(&repo, email, first_name, last_name, admin, yes).await?,
        UserAction::List => list_users(&repo).await?,
        UserAction::Promote { email } => promote_user(&repo, &email).await?,
    }

    Ok(())
}

fn prompt_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Creates an account with interactive prompts.
///
/// The password is always read from the terminal and stored as an
/// Argon2id hash.
async fn create_user(
    repo: &PgUserRepository,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    admin: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let email = prompt_or(email, "Email")?;
    let first_name = prompt_or(first_name, "First name")?;
    let last_name = prompt_or(last_name, "Last name")?;

    if repo.find_by_email(&email).await?.is_some() {
        anyhow::bail!("An account with email '{}' already exists", email);
    }

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if password.len() < 6 {
        anyhow::bail!("Password must be at least 6 characters");
    }

    let roles = if admin {
        vec![Role::User, Role::Administrator]
    } else {
        vec![Role::User]
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Email: {}", email.cyan());
    println!("  Name:  {} {}", first_name, last_name);
    println!("  Roles: {}", format_roles(&roles).bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = PasswordHasher::new().hash_password(&password)?;

    let user = repo
        .create(NewApiUser {
            email,
            password_hash,
            first_name,
            last_name,
            phone_number: None,
            roles,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Account created successfully!".green().bold(),
        user.id
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" -d '{{\"email\":\"{}\",\"password\":\"...\"}}' http://localhost:3000/api/accounts/login",
        user.email
    );
    println!();

    Ok(())
}

/// Lists all accounts with their roles.
///
/// # Output Format
///
/// ```text
/// 📋 Accounts
///
///   ID  Email                          Created              Roles
///   ───────────────────────────────────────────────────────────────────────────
///   1   admin@example.com              2025-03-01 10:30     User, Administrator
/// ```
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Roles".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        let roles = format_roles(&user.roles);
        let roles = if user.has_role(Role::Administrator) {
            roles.yellow()
        } else {
            roles.green()
        };

        println!(
            "  {:<3} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            roles
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Adds the Administrator role to an account, keeping its other roles.
async fn promote_user(repo: &PgUserRepository, email: &str) -> Result<()> {
    println!("{}", "🔐 Promote Account".bright_blue().bold());
    println!();

    let user = repo
        .find_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Account not found")?;

    if user.has_role(Role::Administrator) {
        println!("{}", "⚠️  This account is already an administrator".yellow());
        return Ok(());
    }

    let mut roles = user.roles.clone();
    roles.push(Role::Administrator);

    let updated = repo
        .set_roles(user.id, roles)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update roles: {}", e))?;

    println!(
        "{} {} is now {}",
        "✅".green(),
        updated.email.cyan(),
        format_roles(&updated.roles).bright_yellow()
    );
    println!();

    Ok(())
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Displays country, hotel and account counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let countries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
        .fetch_one(pool)
        .await?;

    let hotels: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await?;

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!("  Countries: {}", countries.to_string().bright_green().bold());
    println!("  Hotels:    {}", hotels.to_string().bright_green().bold());
    println!("  Accounts:  {}", users.to_string().bright_green().bold());
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
        DbAction::Seed => seed(pool).await?,
    }

    Ok(())
}

/// Inserts three countries with one hotel each in a single unit of work.
///
/// Does nothing when countries already exist.
async fn seed(pool: &PgPool) -> Result<()> {
    println!("{}", "🌱 Seeding sample data".bright_blue().bold());
    println!();

    let mut uow = UnitOfWork::begin(pool).await?;

    if !uow.countries().get_all(&[]).await?.is_empty() {
        uow.discard().await?;
        println!("{}", "⚠️  Countries already exist, nothing seeded".yellow());
        return Ok(());
    }

    let samples = [
        ("Jamaica", "JM", "Sandals Resort and Spa", "Negril", 4.5),
        ("Bahamas", "BS", "Grand Palladium", "Nassau", 4.0),
        ("Cayman Island", "CI", "Comfort Suites", "George Town", 4.3),
    ];

    for (country, short_name, hotel, address, rating) in samples {
        let created = uow
            .countries()
            .insert(NewCountry {
                name: country.to_string(),
                short_name: short_name.to_string(),
            })
            .await?;

        uow.hotels()
            .insert(NewHotel {
                name: hotel.to_string(),
                address: address.to_string(),
                rating,
                country_id: created.id,
            })
            .await?;

        println!("  {} {} ({})", "+".green(), country.cyan(), hotel);
    }

    uow.save().await?;

    println!();
    println!("{}", "✅ Sample data inserted".green().bold());
    println!();

    Ok(())
}
