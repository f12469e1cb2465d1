//! Gateway types module
//!
//! ## Input Types
//! - [`JsonBody`]: JSON extractor with 400 rejections
//! - [`UpdateAddressRequest`], [`OrderLookupQuery`], [`OrderPath`]
//!
//! ## Output Types
//! - [`ErrorResponse`]: error body
//! - [`ApiError`] / [`ApiResult`]: handler errors
//!
//! ## Submodules
//! - [`order`]: Order request types
//! - [`response`]: Response types and error codes

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{JsonBody, OrderLookupQuery, OrderPath, UpdateAddressRequest};
pub use response::{ApiError, ApiResult, ErrorResponse, error_codes};
