//! Order handlers (place, lookup, list, re-address, cancel)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::models::{Order, OrderDraft};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, ErrorResponse, JsonBody, OrderLookupQuery, OrderPath,
    UpdateAddressRequest,
};

/// Place an order
///
/// Create a new food order. Any `id` or `delivery_time` in the body is ignored.
#[utoipa::path(
    post,
    path = "/place-order",
    request_body(content = OrderDraft, description = "Order details", content_type = "application/json"),
    responses(
        (status = 200, description = "Order placed", body = Order),
        (status = 400, description = "Invalid request payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<OrderDraft>,
) -> ApiResult<Json<Order>> {
    let order = state.orders.create(draft).map_err(ApiError::internal)?;
    Ok(Json(order))
}

/// Get user orders
///
/// Retrieve all orders placed with the given email.
#[utoipa::path(
    get,
    path = "/get-order",
    params(OrderLookupQuery),
    responses(
        (status = 200, description = "Orders for the email", body = [Order]),
        (status = 400, description = "Missing email", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderLookupQuery>,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = state
        .orders
        .get_by_email(&query.email)
        .map_err(ApiError::lookup)?;
    Ok(Json(orders))
}

/// Get all orders
///
/// Retrieve all active orders.
#[utoipa::path(
    get,
    path = "/get-all-orders",
    responses(
        (status = 200, description = "All active orders", body = [Order]),
        (status = 404, description = "No active orders found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_all_orders(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.orders.get_all().map_err(ApiError::lookup)?;
    Ok(Json(orders))
}

/// Update address
///
/// Update the delivery address of an order. The email must match the one the
/// order was placed with.
#[utoipa::path(
    put,
    path = "/update-address/{email}/{id}",
    params(OrderPath),
    request_body(content = UpdateAddressRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Unable to update new address", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Path(path): Path<OrderPath>,
    body: Result<JsonBody<UpdateAddressRequest>, ApiError>,
) -> ApiResult<Json<Order>> {
    let JsonBody(req) =
        body.map_err(|_| ApiError::bad_request("unable to update new address"))?;

    let order = state
        .orders
        .update_address(&path.email, &path.id, &req.new_address)
        .map_err(ApiError::rejected)?;
    Ok(Json(order))
}

/// Cancel an order
///
/// Cancel an order by order id and email.
#[utoipa::path(
    delete,
    path = "/cancel-order/{email}/{id}",
    params(OrderPath),
    responses(
        (status = 200, description = "Order cancelled", body = String, example = json!("01JAB3K6Z8Q4W2M7N5P9R1T3V5 Order Cancelled Successfully")),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(path): Path<OrderPath>,
) -> ApiResult<Json<String>> {
    let message = state
        .orders
        .cancel(&path.email, &path.id)
        .map_err(ApiError::lookup)?;
    Ok(Json(message))
}
