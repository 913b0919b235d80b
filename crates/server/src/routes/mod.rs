//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (database)
//!
//! # Customers
//! GET  /customers                      - List customers
//! POST /customers                      - Create customer
//! GET  /customer/{id}                  - Customer detail
//!
//! # Addresses
//! GET  /customer/{id}/addresses        - List a customer's addresses
//! POST /customer/{id}/addresses        - Create address for a customer
//! ```
//!
//! Both customer routes name their path segment `{id}`; the router needs one
//! name per position, and in the address routes it is the customer's ID.

pub mod addresses;
pub mod customers;
pub mod health;

use axum::{
    Router,
    http::{Method, StatusCode, Uri},
    middleware::from_fn,
    routing::get,
};

use crate::error::AppError;
use crate::middleware::{cors_layer, request_id_middleware, trace_layer};
use crate::state::AppState;

/// Create the customer and address API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::index).post(customers::create))
        .route("/customer/{id}", get(customers::show))
        .route(
            "/customer/{id}/addresses",
            get(addresses::index).post(addresses::create),
        )
}

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Answer requests for paths no route matches.
async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Answer requests whose path matches but whose method does not.
async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::InvalidRequest {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: format!("{method} is not allowed on {}", uri.path()),
    }
}

/// Build the full application: routes, middleware and state.
///
/// Sentry layers are added by the binary so tests can drive this router
/// without a Sentry client.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(api_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(from_fn(request_id_middleware))
        .layer(trace_layer())
        .layer(cors_layer())
        .with_state(state)
}
