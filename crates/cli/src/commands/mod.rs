//! CLI command implementations.

pub mod schema;
pub mod seed;

use rolodex_server::config::{ConfigError, database_url_from_env};
use rolodex_server::db::{self, RepositoryError};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Database URL missing from the environment.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Database connection or schema error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row was rejected while seeding.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Seed file is not valid YAML for the expected shape.
    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Connect using the same environment variables as the server.
async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url, 2).await?;
    Ok(pool)
}
