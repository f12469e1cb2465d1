//! API Response types and error codes
//!
//! - `ErrorResponse`: JSON body written for every failed request
//! - `ApiError` / `ApiResult<T>`: handler error plumbing
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::OrderError;

// ============================================================================
// Error Envelope
// ============================================================================

/// Error response body
///
/// - code: non-zero error code (see [`error_codes`])
/// - msg: short message description
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code
    #[schema(example = 4001)]
    pub code: i32,
    /// Error message
    #[schema(example = "order not found")]
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

// ============================================================================
// Handler Errors
// ============================================================================

/// HTTP-facing error: status, error code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

/// Handler result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    /// 400 - malformed request or rejected parameters
    pub fn bad_request(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg.to_string(),
        )
    }

    /// 404 - no matching order
    pub fn not_found(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            error_codes::ORDER_NOT_FOUND,
            msg.to_string(),
        )
    }

    /// 405 - unsupported HTTP method
    pub fn method_not_allowed(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            error_codes::METHOD_NOT_ALLOWED,
            msg.to_string(),
        )
    }

    /// 500 - internal failure
    pub fn internal(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg.to_string(),
        )
    }

    /// Lookup failures surface as 404; store failures stay 500.
    pub fn lookup(err: OrderError) -> Self {
        match err {
            OrderError::Internal(_) => Self::internal(err),
            _ => Self::not_found(err),
        }
    }

    /// Mutation failures surface as 400; store failures stay 500.
    pub fn rejected(err: OrderError) -> Self {
        match err {
            OrderError::Internal(_) => Self::internal(err),
            _ => Self::bad_request(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, code = self.code, "{}", self.msg);
        }
        let body = Json(ErrorResponse::new(self.code, self.msg));
        (self.status, body).into_response()
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const ORDER_NOT_FOUND: i32 = 4001;
    pub const METHOD_NOT_ALLOWED: i32 = 4051;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}
