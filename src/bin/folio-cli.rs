// ABOUTME: Folio CLI - command-line tool for portfolio backend administration
// ABOUTME: Handles admin password resets, admin listing, and JWT secret generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Reset the default admin password (creates the admin if absent)
//! folio-cli reset-password
//!
//! # Reset a specific admin's password
//! folio-cli reset-password --username alice --password s3cret
//!
//! # List all admin accounts
//! folio-cli list-admins
//!
//! # Generate a JWT signing secret for the server environment
//! folio-cli generate-secret
//! ```

use clap::{Parser, Subcommand};
use folio_api::{
    auth,
    constants::defaults,
    database_plugins::{factory::Database, DatabaseProvider},
    errors::AppResult,
    models::Admin,
};

type Result<T> = AppResult<T>;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "folio-cli",
    about = "Folio API Management CLI",
    long_about = "Command-line tool for managing Folio API admin accounts and server secrets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Reset an admin password, creating the account when it does not exist
    ResetPassword {
        /// Admin username
        #[arg(long, default_value = "admin")]
        username: String,

        /// New password
        #[arg(long, default_value = "admin123")]
        password: String,
    },

    /// List all admin accounts
    ListAdmins,

    /// Generate a JWT signing secret suitable for the JWT_SECRET variable
    GenerateSecret,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("Folio API CLI");

    match cli.command {
        Command::ResetPassword { username, password } => {
            let database = connect(cli.database_url).await?;
            reset_password(&database, username, password).await?;
        }
        Command::ListAdmins => {
            let database = connect(cli.database_url).await?;
            list_admins(&database).await?;
        }
        Command::GenerateSecret => print_generated_secret(),
    }

    Ok(())
}

/// Connect to the database named by the override, the environment, or the default
async fn connect(database_url: Option<String>) -> Result<Database> {
    let database_url = database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DEFAULT_DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;
    database.migrate().await?;
    Ok(database)
}

/// Reset an admin password, creating the account first when no record matches
async fn reset_password(database: &Database, username: String, password: String) -> Result<()> {
    info!("Resetting password for admin '{}'", username);

    let password_hash = auth::hash_password(&password)?;
    let updated = database
        .update_admin_password(&username, &password_hash)
        .await?;

    if updated > 0 {
        println!("Password reset for {updated} admin record(s) with username '{username}'.");
        return Ok(());
    }

    info!("Admin '{}' not found, creating a new account", username);
    let admin = Admin::new(username.clone(), password_hash);
    if database.create_admin(&admin).await?.is_some() {
        println!("Admin '{username}' created.");
    } else {
        // Another process inserted the same username between the update and
        // the insert; the password on record is theirs, not ours.
        println!("Admin '{username}' was created concurrently; re-run to reset the password.");
    }
    Ok(())
}

/// Print all admin accounts without their password hashes
async fn list_admins(database: &Database) -> Result<()> {
    let admins = database.list_admins().await?;

    if admins.is_empty() {
        println!("No admin users found.");
        return Ok(());
    }

    println!("Found {} admin user(s):", admins.len());
    println!("{}", "=".repeat(80));
    for admin in &admins {
        println!("ID:       {}", admin.id);
        println!("Username: {}", admin.username);
        println!(
            "Created:  {}",
            admin.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!("{}", "-".repeat(80));
    }
    Ok(())
}

/// Generate and print a fresh JWT signing secret
fn print_generated_secret() {
    let secret = auth::generate_jwt_secret();
    println!("Generated JWT signing secret (set this as JWT_SECRET):");
    println!();
    println!("  {secret}");
    println!();
    println!("Keep this value out of shell history and version control.");
}
