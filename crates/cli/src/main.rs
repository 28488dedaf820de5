//! CCoM CLI - Database migrations and operator recovery tools.
//!
//! # Usage
//!
//! ```bash
//! # Run config store database migrations
//! ccom-cli migrate
//!
//! # Overwrite the admin password hash (recovery, no current password needed)
//! ccom-cli admin set-password -p "mật-khẩu-mới"
//!
//! # Print the stored configuration document
//! ccom-cli config show
//!
//! # Restore the compiled-in default document
//! ccom-cli config reset
//! ```
//!
//! All commands talk directly to the config store database via
//! `CONFIG_STORE_DATABASE_URL` (or `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ccom-cli")]
#[command(author, version, about = "CCoM CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run config store database migrations
    Migrate,
    /// Manage the admin credential
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Inspect or reset the configuration document
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Overwrite the stored admin password hash
    SetPassword {
        /// The new admin password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the stored configuration document as JSON
    Show,
    /// Restore the compiled-in default document
    Reset,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::SetPassword { password } => {
                commands::admin::set_password(&password).await?;
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show().await?,
            ConfigAction::Reset => commands::config::reset().await?,
        },
    }
    Ok(())
}
