//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Read the ID assigned by the request-id middleware for log correlation
//!
//! # Design Decisions
//! - IDs are assigned as early as possible (outermost layer)
//! - The same ID is echoed back on the response

use axum::http::HeaderMap;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID, or `"unknown"` when the header is absent or not ASCII.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
