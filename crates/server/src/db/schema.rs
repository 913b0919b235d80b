//! Idempotent schema setup.

use sqlx::PgPool;

/// DDL for the `customers` table.
pub const CREATE_CUSTOMERS: &str = r"
CREATE TABLE IF NOT EXISTS customers (
    id UUID PRIMARY KEY,
    first_name VARCHAR NOT NULL,
    last_name VARCHAR,
    email VARCHAR NOT NULL UNIQUE
)
";

/// DDL for the `addresses` table.
///
/// `street1` is unique per customer, so two customers may share a street.
pub const CREATE_ADDRESSES: &str = r"
CREATE TABLE IF NOT EXISTS addresses (
    id UUID PRIMARY KEY,
    customer_id UUID NOT NULL REFERENCES customers (id),
    nickname VARCHAR,
    street1 VARCHAR NOT NULL,
    street2 VARCHAR,
    city VARCHAR,
    state VARCHAR,
    zipcode VARCHAR,
    UNIQUE (customer_id, street1)
)
";

/// Ensure both tables exist.
///
/// Safe to run against an already-initialized database. `customers` is
/// created first because `addresses` references it.
///
/// # Errors
///
/// Returns `sqlx::Error` if either statement fails; callers treat this as fatal.
pub async fn initialize(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CUSTOMERS).execute(pool).await?;
    sqlx::query(CREATE_ADDRESSES).execute(pool).await?;

    tracing::info!("Database schema ready");
    Ok(())
}
