//! Raw text request bodies.

use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, StringRejection},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};

use crate::binding::{BindError, RequestEntity};

pub fn routes() -> Router {
    Router::new()
        .route("/request-body-string-v1", post(request_body_string_v1))
        .route("/request-body-string-v2", post(request_body_string_v2))
        .route("/request-body-string-v3", post(request_body_string_v3))
        .route("/request-body-string-v3-2", post(request_body_string_v3_2))
        .route("/request-body-string-v4", post(request_body_string_v4))
}

/// Decodes the raw bytes itself.
async fn request_body_string_v1(
    body: Result<Bytes, BytesRejection>,
) -> Result<&'static str, BindError> {
    let body = body?;
    let message_body = String::from_utf8_lossy(&body);

    tracing::info!(%message_body, "request-body-string-v1");
    Ok("ok")
}

async fn request_body_string_v2(
    message_body: Result<String, StringRejection>,
) -> Result<&'static str, BindError> {
    let message_body = message_body?;
    tracing::info!(%message_body, "request-body-string-v2");
    Ok("ok")
}

async fn request_body_string_v3(entity: RequestEntity) -> (StatusCode, &'static str) {
    tracing::info!(message_body = %entity.body, "request-body-string-v3");
    (StatusCode::OK, "ok")
}

/// Same entity, answered with 201 Created.
async fn request_body_string_v3_2(entity: RequestEntity) -> (StatusCode, &'static str) {
    tracing::info!(
        method = %entity.method,
        uri = %entity.uri,
        message_body = %entity.body,
        "request-body-string-v3-2"
    );
    (StatusCode::CREATED, "ok")
}

async fn request_body_string_v4(
    headers: HeaderMap,
    message_body: Result<String, StringRejection>,
) -> Result<&'static str, BindError> {
    let message_body = message_body?;
    tracing::info!(?headers, "request-body-string-v4");
    tracing::info!(%message_body, "request-body-string-v4");
    Ok("ok")
}
