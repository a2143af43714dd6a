//! The handler catalog.
//!
//! Each controller owns its routes; `router()` merges them.

pub mod mapping;
pub mod request_body_json;
pub mod request_body_string;
pub mod request_param;
pub mod response_body;
pub mod response_view;

use axum::Router;

/// All controller routes, without middleware.
pub fn router() -> Router {
    Router::new()
        .merge(log_test::routes())
        .merge(mapping::routes())
        .merge(request_param::routes())
        .merge(request_body_string::routes())
        .merge(request_body_json::routes())
        .merge(response_body::routes())
        .merge(response_view::routes())
}
