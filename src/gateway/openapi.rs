//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3 document for the order API.
//!
//! - Swagger UI: `http://localhost:8383/swagger`
//! - OpenAPI JSON: `http://localhost:8383/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{ErrorResponse, UpdateAddressRequest};
use crate::models::{Order, OrderDraft};

/// Path the OpenAPI JSON is served from
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WeServeFood Delivery Order Management API",
        version = "1.0",
        description = "API for managing food delivery orders"
    ),
    servers(
        (url = "http://localhost:8383", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::ping,
        crate::gateway::handlers::order::place_order,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::get_all_orders,
        crate::gateway::handlers::order::update_address,
        crate::gateway::handlers::order::cancel_order,
    ),
    components(
        schemas(Order, OrderDraft, UpdateAddressRequest, ErrorResponse)
    ),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Orders", description = "Place, look up, update and cancel orders")
    )
)]
pub struct ApiDoc;
