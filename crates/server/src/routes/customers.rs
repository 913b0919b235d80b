//! Customer route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use rolodex_core::{Customer, CustomerId, NewCustomer};

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// List all customers.
///
/// GET /customers
///
/// Returns an empty array when there are no customers.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    Ok(Json(customers))
}

/// Fetch a single customer.
///
/// GET /customer/{id}
///
/// # Errors
///
/// Returns `AppError::InvalidRequest` if `id` is not a UUID.
/// Returns `AppError::NotFound` if no customer has that ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> Result<Json<Customer>> {
    CustomerRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))
}

/// Create a customer under a server-generated ID.
///
/// POST /customers
///
/// # Errors
///
/// Returns `AppError::InvalidRequest` if the body is not a valid customer.
/// Returns `AppError::Database` (409) if the email is already taken.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewCustomer>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool()).create(&body).await?;
    Ok(Json(customer))
}
