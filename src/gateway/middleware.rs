//! Request logging and validation middleware
//!
//! Layer order (outermost first):
//! 1. [`log_request`] - every request is logged before anything else runs
//! 2. [`reject_unsupported_method`] - only GET/POST/PUT/DELETE get through
//! 3. [`validate_request`] - route layer; checks required body/query/path fields

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    body::{self, Body},
    extract::{ConnectInfo, FromRequestParts, Path, Query, Request},
    http::{Method, header},
    middleware::Next,
    response::Response,
};

use super::types::ApiError;

/// Largest POST body buffered for validation (axum's default JSON limit)
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Path that requires an `email` query parameter
const ORDER_LOOKUP_PATH: &str = "/get-order";

/// Log method, host, URI and remote address of every request.
pub async fn log_request(request: Request, next: Next) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().host())
        .unwrap_or("-")
        .to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        "{} - {} {} {}",
        request.method(),
        host,
        request.uri(),
        remote_addr
    );

    next.run(request).await
}

/// Reject anything that is not GET, POST, PUT or DELETE with 405.
pub async fn reject_unsupported_method(request: Request, next: Next) -> Result<Response, ApiError> {
    match *request.method() {
        Method::GET | Method::POST | Method::PUT | Method::DELETE => Ok(next.run(request).await),
        _ => {
            tracing::warn!("Validation Failed: unsupported method {}", request.method());
            Err(ApiError::method_not_allowed("Invalid Request Method"))
        }
    }
}

/// Check required request fields before the handler runs.
///
/// Must be installed with `Router::route_layer` so path parameters are
/// available.
pub async fn validate_request(request: Request, next: Next) -> Result<Response, ApiError> {
    let request = match *request.method() {
        Method::POST => validate_post_request(request).await?,
        Method::GET => validate_get_request(request)?,
        Method::PUT | Method::DELETE => validate_order_path(request).await?,
        _ => return Err(ApiError::method_not_allowed("Invalid Request Method")),
    };
    Ok(next.run(request).await)
}

/// POST needs a non-empty body. The body is buffered and re-attached.
async fn validate_post_request(request: Request) -> Result<Request, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        tracing::warn!("Validation Failed: unreadable request body: {}", e);
        ApiError::bad_request(" Validation Failed: Unreadable request body")
    })?;

    if bytes.is_empty() {
        tracing::warn!("Validation Failed: Missing request body");
        return Err(ApiError::bad_request(
            " Validation Failed: Missing request body",
        ));
    }

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// GET on the order lookup path needs a non-empty `email` query parameter.
fn validate_get_request(request: Request) -> Result<Request, ApiError> {
    if request.uri().path() != ORDER_LOOKUP_PATH {
        return Ok(request);
    }

    let has_email = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .map(|Query(query)| query.get("email").is_some_and(|email| !email.is_empty()))
        .unwrap_or(false);

    if !has_email {
        tracing::warn!("Validation Failed: Missing email in query parameter");
        return Err(ApiError::bad_request(
            " Validation Failed: Missing email in query parameter",
        ));
    }
    Ok(request)
}

/// PUT and DELETE need non-empty `email` and `id` path parameters.
async fn validate_order_path(request: Request) -> Result<Request, ApiError> {
    let (mut parts, body) = request.into_parts();
    let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, &())
        .await
        .map(|Path(params)| params)
        .unwrap_or_default();

    let present = |key: &str| params.get(key).is_some_and(|value| !value.is_empty());
    if !present("email") || !present("id") {
        tracing::warn!("Validation Failed: Missing email or orderID parameter");
        return Err(ApiError::bad_request(
            " Validation Failed: Missing email or orderID parameter",
        ));
    }

    Ok(Request::from_parts(parts, body))
}
