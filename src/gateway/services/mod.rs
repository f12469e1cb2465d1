//! Gateway Services Layer
//!
//! This module contains business logic extracted from handlers.
//! Handlers become thin HTTP adapters that delegate to services.

pub mod order;

pub use order::{DELIVERY_ESTIMATE_MINUTES, OrderError, OrderService};
