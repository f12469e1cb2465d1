//! Order request types for the HTTP API
//!
//! - `UpdateAddressRequest`: PUT /update-address body
//! - `OrderLookupQuery`: GET /get-order query string
//! - `OrderPath`: `{email}/{id}` path parameters
//! - `JsonBody<T>`: JSON extractor that rejects with 400 instead of 415/422

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::{IntoParams, ToSchema};

use super::response::ApiError;

// ============================================================================
// Request Types
// ============================================================================

/// Delivery address update body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAddressRequest {
    /// Replacement delivery address
    #[schema(example = "456 New St")]
    pub new_address: String,
}

/// Order lookup query
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderLookupQuery {
    /// Customer email
    pub email: String,
}

/// Path parameters shared by update and cancel
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct OrderPath {
    /// Customer email the order was placed with
    pub email: String,
    /// Order id
    pub id: String,
}

// ============================================================================
// JsonBody: 400 on any JSON rejection
// ============================================================================

/// JSON body extractor.
///
/// The body is decoded as JSON whatever its `Content-Type`. Bad syntax,
/// missing fields and wrong field types reject with 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Unreadable request body: {}", rejection.body_text());
            ApiError::bad_request(rejection.body_text())
        })?;
        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    ApiError::bad_request(rejection.body_text())
}
