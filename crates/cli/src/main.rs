//! Rolodex CLI - Schema setup and data seeding.
//!
//! # Usage
//!
//! ```bash
//! # Create the customers and addresses tables if missing
//! rolodex-cli schema init
//!
//! # Load customers (and their addresses) from a YAML file
//! rolodex-cli seed fixtures/customers.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `ROLODEX_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rolodex-cli")]
#[command(author, version, about = "Rolodex CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the database schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Insert customers and addresses from a YAML file
    Seed {
        /// Path to the YAML seed file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Create the tables if they do not exist
    Init,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Schema { action } => match action {
            SchemaAction::Init => commands::schema::init().await?,
        },
        Commands::Seed { file } => {
            commands::seed::from_file(&file).await?;
        }
    }
    Ok(())
}
