//! Seed the database from a YAML file.
//!
//! # File Format
//!
//! ```yaml
//! customers:
//!   - fname: Ada
//!     lname: Lovelace
//!     email: ada@example.com
//!     addresses:
//!       - nickname: home
//!         street1: 12 St James's Square
//!         city: London
//! ```
//!
//! Keys match the HTTP API. Rows are inserted one at a time through the same
//! repositories the server uses, and seeding stops at the first rejected row.

use std::path::Path;

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use rolodex_core::{NewAddress, NewCustomer};
use rolodex_server::db::{AddressRepository, CustomerRepository, schema};

use super::{CommandError, connect};

/// Top-level shape of a seed file.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub customers: Vec<SeedCustomer>,
}

/// A customer plus the addresses to create for it.
#[derive(Debug, Deserialize)]
pub struct SeedCustomer {
    #[serde(flatten)]
    pub customer: NewCustomer,
    #[serde(default)]
    pub addresses: Vec<NewAddress>,
}

/// Counts of inserted rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub addresses: usize,
}

/// Parse seed file contents.
///
/// # Errors
///
/// Returns `CommandError::Yaml` if the contents do not match [`SeedFile`].
pub fn parse(content: &str) -> Result<SeedFile, CommandError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Read `path`, ensure the schema exists, and insert its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the database is
/// unreachable, or a row violates a constraint.
pub async fn from_file(path: &Path) -> Result<SeedSummary, CommandError> {
    info!(path = %path.display(), "Loading seed file");

    // Read and parse before connecting to the database
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Io {
            path: path.display().to_string(),
            source,
        })?;
    let seed = parse(&content)?;
    info!(customers = seed.customers.len(), "Parsed seed file");

    let pool = connect().await?;
    schema::initialize(&pool).await?;

    let result = insert(&pool, &seed).await;
    match &result {
        Ok(summary) => info!(
            customers = summary.customers,
            addresses = summary.addresses,
            "Seeding complete"
        ),
        Err(e) => tracing::error!(error = %e, "Seeding stopped"),
    }
    result
}

/// Insert every customer and its addresses, stopping at the first failure.
async fn insert(pool: &PgPool, seed: &SeedFile) -> Result<SeedSummary, CommandError> {
    let customers = CustomerRepository::new(pool);
    let addresses = AddressRepository::new(pool);
    let mut summary = SeedSummary::default();

    for entry in &seed.customers {
        let customer = customers.create(&entry.customer).await?;
        summary.customers += 1;

        for address in &entry.addresses {
            addresses.create(customer.id, address).await?;
            summary.addresses += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customers_with_addresses() {
        let seed = parse(
            r"
customers:
  - fname: Ada
    lname: Lovelace
    email: ada@example.com
    addresses:
      - nickname: home
        street1: 12 St James's Square
        city: London
  - fname: Grace
    email: grace@example.com
",
        )
        .unwrap();

        assert_eq!(seed.customers.len(), 2);
        let ada = &seed.customers[0];
        assert_eq!(ada.customer.first_name, "Ada");
        assert_eq!(ada.customer.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(ada.addresses.len(), 1);
        assert_eq!(ada.addresses[0].city.as_deref(), Some("London"));

        let grace = &seed.customers[1];
        assert_eq!(grace.customer.last_name, None);
        assert!(grace.addresses.is_empty());
    }

    #[test]
    fn test_parse_empty_file() {
        let seed = parse("customers: []").unwrap();
        assert!(seed.customers.is_empty());
    }

    #[test]
    fn test_parse_rejects_customer_without_email() {
        let result = parse(
            r"
customers:
  - fname: Ada
",
        );
        assert!(matches!(result, Err(CommandError::Yaml(_))));
    }
}
