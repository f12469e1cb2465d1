//! HTTP handlers
//!
//! Thin adapters: extract, call [`OrderService`](super::services::OrderService),
//! serialize.

pub mod health;
pub mod order;

pub use health::{PING_REPLY, ping};
pub use order::{cancel_order, get_all_orders, get_order, place_order, update_address};
