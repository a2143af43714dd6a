//! Text and JSON response bodies.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::model::HelloData;

pub fn routes() -> Router {
    Router::new()
        .route("/response-body-string-v1", get(response_body_v1))
        .route("/response-body-string-v2", get(response_body_v2))
        .route("/response-body-string-v3", get(response_body_v3))
        .route("/response-body-json-v1", get(response_body_json_v1))
        .route("/response-body-json-v2", get(response_body_json_v2))
}

/// Builds the response by hand.
async fn response_body_v1() -> Response {
    let mut response = "ok".into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain;charset=UTF-8"),
    );
    response
}

async fn response_body_v2() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

async fn response_body_v3() -> &'static str {
    "ok"
}

async fn response_body_json_v1() -> (StatusCode, Json<HelloData>) {
    (StatusCode::OK, Json(HelloData::new("userA", 20)))
}

async fn response_body_json_v2() -> Json<HelloData> {
    Json(HelloData::new("userA", 20))
}
