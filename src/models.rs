//! Order record and placement draft
//!
//! - `Order`: a stored food-delivery order, as returned by every endpoint
//! - `OrderDraft`: the caller-supplied part of an order (POST /place-order)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Custom deserializer for non-empty strings
fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("email cannot be empty"));
    }
    Ok(s)
}

/// Treat an explicit `null` like a missing field
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single food-delivery order.
///
/// `id` and `delivery_time` are assigned by the server at creation and never
/// change. `email` is fixed at creation too; only `address` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Server-generated order id
    #[schema(example = "01JAB3K6Z8Q4W2M7N5P9R1T3V5")]
    pub id: String,
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// Customer email (not unique across orders)
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Delivery address
    #[schema(example = "1 Main St")]
    pub address: String,
    /// Free-form item descriptions, in order
    #[serde(default)]
    #[schema(example = json!(["Margherita pizza", "Lemonade"]))]
    pub items: Vec<String>,
    /// Estimated delivery time (RFC 3339, UTC)
    #[schema(example = "2026-10-18T12:30:00+00:00")]
    pub delivery_time: String,
}

/// Order placement request body.
///
/// Any `id` or `delivery_time` sent by the client is ignored; the server
/// assigns both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDraft {
    /// Customer name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer email (must not be empty)
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub email: String,
    /// Delivery address
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub address: String,
    /// Item descriptions
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub items: Vec<String>,
}

impl OrderDraft {
    pub fn new(email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Turn the draft into a stored order with server-assigned fields.
    pub fn into_order(self, id: String, delivery_time: String) -> Order {
        Order {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            items: self.items,
            delivery_time,
        }
    }
}
