use std::sync::Arc;

use crate::gateway::services::OrderService;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Order service, owner of the in-memory store
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(orders: Arc<OrderService>) -> Self {
        Self { orders }
    }
}
