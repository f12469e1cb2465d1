//! WeServeFood - Delivery Order Management
//!
//! A small HTTP service for food-delivery orders. All state lives in process
//! memory and is discarded on restart.
//!
//! # Modules
//!
//! - [`models`] - Order record and placement draft
//! - [`store`] - Mutex-guarded in-memory order map
//! - [`gateway`] - HTTP gateway (routes, middleware, handlers, OpenAPI)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use config::{AppConfig, GatewayConfig};
pub use gateway::services::{OrderError, OrderService};
pub use models::{Order, OrderDraft};
pub use store::OrderStore;
