//! JSON request bodies.

use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, StringRejection},
    routing::post,
    Json, Router,
};

use crate::binding::{parse_json, BindError, JsonBody};
use crate::model::HelloData;

pub fn routes() -> Router {
    Router::new()
        .route("/request-body-json-v1", post(request_body_json_v1))
        .route("/request-body-json-v2", post(request_body_json_v2))
        .route("/request-body-json-v3", post(request_body_json_v3))
        .route("/request-body-json-v4", post(request_body_json_v4))
        .route("/request-body-json-v5", post(request_body_json_v5))
}

/// Reads the body as bytes and deserializes it by hand.
async fn request_body_json_v1(
    body: Result<Bytes, BytesRejection>,
) -> Result<&'static str, BindError> {
    let body = body?;
    let message_body = String::from_utf8_lossy(&body);
    tracing::info!(%message_body, "request-body-json-v1");

    let hello_data: HelloData = parse_json(&message_body)?;
    tracing::info!(username = %hello_data.username, age = hello_data.age, "request-body-json-v1");
    Ok("ok")
}

async fn request_body_json_v2(
    message_body: Result<String, StringRejection>,
) -> Result<&'static str, BindError> {
    let message_body = message_body?;
    tracing::info!(%message_body, "request-body-json-v2");

    let hello_data: HelloData = parse_json(&message_body)?;
    tracing::info!(username = %hello_data.username, age = hello_data.age, "request-body-json-v2");
    Ok("ok")
}

async fn request_body_json_v3(JsonBody(hello_data): JsonBody<HelloData>) -> &'static str {
    tracing::info!(username = %hello_data.username, age = hello_data.age, "request-body-json-v3");
    "ok"
}

async fn request_body_json_v4(body: JsonBody<HelloData>) -> &'static str {
    let hello_data = body.0;
    tracing::info!(username = %hello_data.username, age = hello_data.age, "request-body-json-v4");
    "ok"
}

/// Echoes the bound object back as JSON.
async fn request_body_json_v5(JsonBody(hello_data): JsonBody<HelloData>) -> Json<HelloData> {
    tracing::info!(username = %hello_data.username, age = hello_data.age, "request-body-json-v5");
    Json(hello_data)
}
