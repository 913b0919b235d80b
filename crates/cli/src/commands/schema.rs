//! Schema commands.

use rolodex_server::db::schema;

use super::{CommandError, connect};

/// Create the `customers` and `addresses` tables if they are missing.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the DDL fails.
pub async fn init() -> Result<(), CommandError> {
    let pool = connect().await?;
    schema::initialize(&pool).await?;
    Ok(())
}
