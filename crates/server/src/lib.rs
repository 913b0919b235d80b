//! Rolodex server library.
//!
//! This crate provides the HTTP service as a library, so the binary, the CLI
//! and the integration tests all share one router and one data access layer.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
