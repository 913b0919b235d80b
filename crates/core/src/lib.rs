//! Rolodex Core - Shared domain types.
//!
//! This crate provides the types shared by the Rolodex components:
//! - `server` - HTTP service over customers and their addresses
//! - `cli` - Command-line tools for schema setup and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP handling. Enable the `postgres` feature to get `sqlx` encoding
//! for the IDs and `FromRow` for the entities.
//!
//! # Modules
//!
//! - [`types`] - Typed UUID IDs plus the `Customer` and `Address` entities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
