//! Liveness handler

/// Plain-text liveness reply
pub const PING_REPLY: &str = "Hello From the Server!!";

/// Ping server
///
/// Check server availability.
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn ping() -> &'static str {
    PING_REPLY
}
