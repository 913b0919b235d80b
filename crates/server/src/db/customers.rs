//! Customer repository for database operations.
//!
//! Queries are built at runtime with `sqlx::query_as` and bound parameters, so
//! the crate compiles without a live database.

use sqlx::PgPool;

use rolodex_core::{Customer, CustomerId, NewCustomer};

use super::{RepositoryError, classify_read_error, classify_write_error};

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every customer, in whatever order the database returns them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row cannot be decoded.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, email
            FROM customers
            ",
        )
        .fetch_all(self.pool)
        .await
        .map_err(classify_read_error)
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row cannot be decoded.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, email
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(classify_read_error)
    }

    /// Insert a customer under a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::InvalidInput` if the database rejects a value.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        let id = CustomerId::generate();

        let created = sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customers (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email
            ",
        )
        .bind(id)
        .bind(&customer.first_name)
        .bind(customer.last_name.as_deref())
        .bind(&customer.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            classify_write_error(e, || {
                format!("a customer with email {} already exists", customer.email)
            })
        })?;

        tracing::info!(customer_id = %created.id, "Customer created");
        Ok(created)
    }
}
