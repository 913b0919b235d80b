//! Address repository for database operations.

use sqlx::PgPool;

use rolodex_core::{Address, AddressId, CustomerId, NewAddress};

use super::{RepositoryError, classify_read_error, classify_write_error};

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the addresses that belong to a customer.
    ///
    /// An unknown customer simply has no addresses.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row cannot be decoded.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Address>, RepositoryError> {
        sqlx::query_as::<_, Address>(
            r"
            SELECT id, customer_id, nickname, street1, street2, city, state, zipcode
            FROM addresses
            WHERE customer_id = $1
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await
        .map_err(classify_read_error)
    }

    /// Insert an address for `customer_id` under a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the customer does not exist.
    /// Returns `RepositoryError::Conflict` if the customer already has an
    /// address with the same `street1`.
    /// Returns `RepositoryError::InvalidInput` if the database rejects a value.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        customer_id: CustomerId,
        address: &NewAddress,
    ) -> Result<Address, RepositoryError> {
        let id = AddressId::generate();

        let created = sqlx::query_as::<_, Address>(
            r"
            INSERT INTO addresses
                (id, customer_id, nickname, street1, street2, city, state, zipcode)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, customer_id, nickname, street1, street2, city, state, zipcode
            ",
        )
        .bind(id)
        .bind(customer_id)
        .bind(address.nickname.as_deref())
        .bind(&address.street1)
        .bind(address.street2.as_deref())
        .bind(address.city.as_deref())
        .bind(address.state.as_deref())
        .bind(address.zipcode.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                RepositoryError::InvalidReference(format!(
                    "customer {customer_id} does not exist"
                ))
            }
            other => classify_write_error(other, || {
                format!(
                    "customer {customer_id} already has an address at {}",
                    address.street1
                )
            }),
        })?;

        tracing::info!(%customer_id, address_id = %created.id, "Address created");
        Ok(created)
    }
}
