//! In-memory order store
//!
//! A single `Mutex` guards the whole id → order map. Every caller goes through
//! [`OrderStore::with_orders`], so one logical operation is exactly one lock
//! acquisition and the lock is never held across operations.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::models::Order;

/// Store-level failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A previous holder panicked while the lock was held
    #[error("order store lock poisoned")]
    Poisoned,
}

/// Process-local order map keyed by order id.
///
/// Created empty, never persisted. Construct one per service (or per test)
/// instead of sharing a global.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<FxHashMap<String, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the order map.
    pub fn with_orders<R>(
        &self,
        f: impl FnOnce(&mut FxHashMap<String, Order>) -> R,
    ) -> Result<R, StoreError> {
        let mut orders = self.orders.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut orders))
    }

    /// Number of stored orders
    pub fn len(&self) -> Result<usize, StoreError> {
        self.with_orders(|orders| orders.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.with_orders(|orders| orders.is_empty())
    }
}
