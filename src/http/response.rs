//! Response helpers shared by handlers and middleware.

use std::time::Instant;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::observability::metrics::{record_request, UNMATCHED_ROUTE};

/// JSON error document used for every failure the service reports.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = json!({
        "status": status.as_u16(),
        "error": status.canonical_reason().unwrap_or("Unknown"),
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}

/// Fallback for paths no controller maps.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let start = Instant::now();
    tracing::debug!(path = %uri.path(), "No route matched");
    let response = error_response(StatusCode::NOT_FOUND, format!("no handler for {}", uri.path()));
    record_request(method.as_str(), StatusCode::NOT_FOUND.as_u16(), UNMATCHED_ROUTE, start);
    response
}
