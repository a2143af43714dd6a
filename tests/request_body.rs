//! Text and JSON request bodies over HTTP.

use reqwest::{header, StatusCode};
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_string_bodies() {
    let server = common::start_server().await;
    let client = common::client();

    for path in [
        "/request-body-string-v1",
        "/request-body-string-v2",
        "/request-body-string-v3",
        "/request-body-string-v4",
    ] {
        let res = client
            .post(server.url(path))
            .header(header::CONTENT_TYPE, "text/plain")
            .body("hello")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.text().await.unwrap(), "ok");
    }
}

#[tokio::test]
async fn test_invalid_utf8_text_body() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/request-body-string-v2"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(vec![0xff, 0xfe, 0xfd])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_string_body_created() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/request-body-string-v3-2"))
        .body("hello")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_string_body_requires_post() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/request-body-string-v1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_json_bodies() {
    let server = common::start_server().await;
    let client = common::client();
    let payload = json!({"username": "hello", "age": 20});

    for path in [
        "/request-body-json-v1",
        "/request-body-json-v2",
        "/request-body-json-v3",
        "/request-body-json-v4",
    ] {
        let res = client
            .post(server.url(path))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.text().await.unwrap(), "ok");
    }
}

#[tokio::test]
async fn test_json_echo() {
    let server = common::start_server().await;
    let payload = json!({"username": "userA", "age": 20});

    let res = common::client()
        .post(server.url("/request-body-json-v5"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_malformed_json() {
    let server = common::start_server().await;
    let client = common::client();

    for path in [
        "/request-body-json-v1",
        "/request-body-json-v2",
        "/request-body-json-v3",
        "/request-body-json-v5",
    ] {
        let res = client
            .post(server.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .body("{\"username\": ")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
    }
}

#[tokio::test]
async fn test_json_body_requires_content_type() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/request-body-json-v3"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(r#"{"username":"hello","age":20}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // Raw-body versions parse regardless of the declared type.
    let res = common::client()
        .post(server.url("/request-body-json-v2"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(r#"{"username":"hello","age":20}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = mvc_basic::AppConfig::default();
    config.limits.max_body_size = 16;
    let server = common::start_server_with(config).await;

    let res = common::client()
        .post(server.url("/request-body-string-v2"))
        .body("x".repeat(64))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 413);

    let res = common::client()
        .post(server.url("/request-body-json-v1"))
        .body("x".repeat(64))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 413);
}
