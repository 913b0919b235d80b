//! Database operations for the Rolodex `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `customers` - One row per customer, unique on `email`
//! - `addresses` - Postal addresses, `customer_id` references `customers(id)`
//!
//! # Schema
//!
//! There are no migrations. [`schema::initialize`] issues idempotent
//! `CREATE TABLE IF NOT EXISTS` statements on startup, and the same function
//! backs `rolodex-cli schema init`.

pub mod addresses;
pub mod customers;
pub mod schema;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use addresses::AddressRepository;
pub use customers::CustomerRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A foreign key pointed at a row that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The database refused a supplied value (SQLSTATE class 22).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(max_connections.min(2))
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Classify a failed `INSERT`.
///
/// Unique violations become `Conflict` carrying the caller's message and data
/// exceptions become `InvalidInput`; everything else stays a `Database` error.
/// Tables with foreign keys check for `InvalidReference` before calling this.
fn classify_write_error(
    err: sqlx::Error,
    on_conflict: impl FnOnce() -> String,
) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(on_conflict());
        }
        if db_err.code().is_some_and(|code| code.starts_with("22")) {
            return RepositoryError::InvalidInput(db_err.message().to_owned());
        }
    }
    RepositoryError::Database(err)
}

/// Wrap row decode failures as `DataCorruption`, leaving other errors alone.
fn classify_read_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::DataCorruption(err.to_string())
        }
        other => RepositoryError::Database(other),
    }
}
