//! Order Service - Business logic for order operations
//!
//! Create, look up, re-address and cancel orders held in an [`OrderStore`].
//! Each operation runs under a single store lock acquisition; nothing is
//! held across operations.

use chrono::{Duration, SecondsFormat, Utc};
use thiserror::Error;

use crate::models::{Order, OrderDraft};
use crate::store::{OrderStore, StoreError};

/// Fixed delivery estimate added to the creation time
pub const DELIVERY_ESTIMATE_MINUTES: i64 = 30;

/// Order service error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// No matching order (or no orders at all)
    #[error("{0}")]
    NotFound(&'static str),

    /// Order exists but belongs to a different email
    #[error("email does not match")]
    EmailMismatch,

    /// Store is unusable
    #[error("Internal error: {0}")]
    Internal(#[from] StoreError),
}

/// Order Service - handles all order-related business logic
#[derive(Debug, Default)]
pub struct OrderService {
    store: OrderStore,
}

impl OrderService {
    /// Create a service owning the given store
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }

    /// Place a new order.
    ///
    /// Assigns a fresh id and a delivery estimate of now + 30 minutes.
    pub fn create(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        let order = draft.into_order(generate_order_id(), delivery_estimate());

        self.store.with_orders(|orders| {
            orders.insert(order.id.clone(), order.clone());
        })?;

        tracing::info!(
            order_id = %order.id,
            email = %order.email,
            items = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// All orders placed with `email`, in no particular order
    pub fn get_by_email(&self, email: &str) -> Result<Vec<Order>, OrderError> {
        let found: Vec<Order> = self.store.with_orders(|orders| {
            orders
                .values()
                .filter(|order| order.email == email)
                .cloned()
                .collect()
        })?;

        if found.is_empty() {
            tracing::debug!(email, "No orders for email");
            return Err(OrderError::NotFound("no orders found for the given email"));
        }
        Ok(found)
    }

    /// Every active order, in no particular order
    pub fn get_all(&self) -> Result<Vec<Order>, OrderError> {
        let all: Vec<Order> = self
            .store
            .with_orders(|orders| orders.values().cloned().collect())?;

        if all.is_empty() {
            return Err(OrderError::NotFound("no active orders found"));
        }
        Ok(all)
    }

    /// Replace the delivery address of order `id`, owned by `email`.
    ///
    /// Lookup, ownership check and write happen under one lock acquisition.
    /// On error the stored order is untouched.
    pub fn update_address(
        &self,
        email: &str,
        id: &str,
        new_address: &str,
    ) -> Result<Order, OrderError> {
        let updated = self.store.with_orders(|orders| -> Result<Order, OrderError> {
            let order = orders
                .get_mut(id)
                .ok_or(OrderError::NotFound("order not found"))?;
            if order.email != email {
                return Err(OrderError::EmailMismatch);
            }
            order.address = new_address.to_string();
            Ok(order.clone())
        })??;

        tracing::info!(order_id = %id, email, "Delivery address updated");
        Ok(updated)
    }

    /// Cancel order `id` owned by `email`.
    ///
    /// A missing id and an email mismatch are reported the same way.
    pub fn cancel(&self, email: &str, id: &str) -> Result<String, OrderError> {
        let removed = self.store.with_orders(|orders| {
            let owned = orders.get(id).is_some_and(|order| order.email == email);
            if owned { orders.remove(id) } else { None }
        })?;

        match removed {
            Some(order) => {
                tracing::info!(order_id = %order.id, email, "Order cancelled");
                Ok(format!("{} Order Cancelled Successfully", order.id))
            }
            None => {
                tracing::warn!(order_id = %id, email, "Cancel rejected: no matching order");
                Err(OrderError::NotFound("order not found"))
            }
        }
    }

    /// Number of active orders
    pub fn active_count(&self) -> Result<usize, OrderError> {
        Ok(self.store.len()?)
    }
}

/// Timestamp-prefixed random id (ULID, Crockford base32)
fn generate_order_id() -> String {
    ulid::Ulid::new().to_string()
}

fn delivery_estimate() -> String {
    (Utc::now() + Duration::minutes(DELIVERY_ESTIMATE_MINUTES))
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
