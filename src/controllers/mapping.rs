//! URL, method and condition-based request mapping.

use axum::{
    extract::{rejection::PathRejection, Path},
    http::header,
    response::IntoResponse,
    routing::{any, get, post},
    Router,
};

use crate::binding::BindError;
use crate::routing::Conditions;

pub fn routes() -> Router {
    Router::new()
        .route("/hello-basic", any(hello_basic))
        .route("/hello-go", any(hello_basic))
        .route("/mapping-get-v1", get(mapping_get_v1))
        .route("/mapping-get-v2", get(mapping_get_v2))
        .route("/mapping/{user_id}", get(mapping_path))
        .route(
            "/mapping/users/{user_id}/orders/{order_id}",
            get(mapping_user_order),
        )
        .route(
            "/mapping-param",
            Conditions::new().params("mode=debug").apply(get(mapping_param)),
        )
        .route(
            "/mapping-header",
            Conditions::new().headers("mode=debug").apply(get(mapping_header)),
        )
        .route(
            "/mapping-consume",
            Conditions::new()
                .consumes("application/json")
                .apply(post(mapping_consumes)),
        )
        .route(
            "/mapping-produce",
            Conditions::new()
                .produces("text/plain")
                .apply(post(mapping_produces)),
        )
}

/// Any HTTP method, two URLs.
async fn hello_basic() -> &'static str {
    tracing::info!("hello-basic");
    "ok"
}

async fn mapping_get_v1() -> &'static str {
    tracing::info!("mapping-get-v1");
    "ok"
}

async fn mapping_get_v2() -> &'static str {
    tracing::info!("mapping-get-v2");
    "ok"
}

async fn mapping_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<&'static str, BindError> {
    let Path(user_id) = path?;
    tracing::info!(%user_id, "mapping-path");
    Ok("ok")
}

/// `order_id` must be a 64-bit integer.
async fn mapping_user_order(
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<&'static str, BindError> {
    let Path((user_id, order_id)) = path?;
    tracing::info!(%user_id, order_id, "mapping-path");
    Ok("ok")
}

async fn mapping_param() -> &'static str {
    tracing::info!("mapping-param");
    "ok"
}

async fn mapping_header() -> &'static str {
    tracing::info!("mapping-header");
    "ok"
}

async fn mapping_consumes() -> &'static str {
    tracing::info!("mapping-consume");
    "ok"
}

async fn mapping_produces() -> impl IntoResponse {
    tracing::info!("mapping-produce");
    ([(header::CONTENT_TYPE, "text/plain")], "ok")
}
