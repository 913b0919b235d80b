//! Address route handlers, nested under a customer.

use axum::{Json, extract::State};
use tracing::instrument;

use rolodex_core::{Address, CustomerId, NewAddress};

use crate::db::AddressRepository;
use crate::error::Result;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// List a customer's addresses.
///
/// GET /customer/{customer_id}/addresses
///
/// A customer with no addresses (or an unknown customer ID) yields `[]`.
///
/// # Errors
///
/// Returns `AppError::InvalidRequest` if `customer_id` is not a UUID.
/// Returns `AppError::Database` if the query fails.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    ApiPath(customer_id): ApiPath<CustomerId>,
) -> Result<Json<Vec<Address>>> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_customer(customer_id)
        .await?;
    Ok(Json(addresses))
}

/// Create an address for the customer named in the path.
///
/// POST /customer/{customer_id}/addresses
///
/// # Errors
///
/// Returns `AppError::InvalidRequest` for a bad path or body.
/// Returns `AppError::Database` with 404 if the customer does not exist,
/// or 409 if the customer already has an address with the same `street1`.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    ApiPath(customer_id): ApiPath<CustomerId>,
    ApiJson(body): ApiJson<NewAddress>,
) -> Result<Json<Address>> {
    let address = AddressRepository::new(state.pool())
        .create(customer_id, &body)
        .await?;
    Ok(Json(address))
}
