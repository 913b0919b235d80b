//! Core types for Rolodex.
//!
//! This module provides the persisted entities and their creation payloads.

pub mod address;
pub mod customer;
pub mod id;

pub use address::{Address, NewAddress};
pub use customer::{Customer, NewCustomer};
pub use id::*;
