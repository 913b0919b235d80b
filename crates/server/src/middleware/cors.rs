//! Permissive CORS policy.
//!
//! Any origin may call the API with credentials. Browsers refuse a literal
//! `*` alongside `Access-Control-Allow-Credentials: true`, so the request's
//! own origin and requested headers are echoed back instead.

use axum::http::Method;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build the CORS layer: any origin, credentials allowed, GET and POST only.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
}
