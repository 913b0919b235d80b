//! HTTP middleware stack for the server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors)
//! 2. CORS (answers preflights, decorates every response)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (propagate or generate `x-request-id`)

pub mod cors;
pub mod request_id;
pub mod trace;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use trace::trace_layer;
