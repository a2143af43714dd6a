//! URL, method and condition-based mapping over HTTP.

use reqwest::{header, Method, StatusCode};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_any_method_mapping() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ["/hello-basic", "/hello-go"] {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let res = client
                .request(method.clone(), server.url(path))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{method} {path}");
        }
    }
}

#[tokio::test]
async fn test_get_only_mapping() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ["/mapping-get-v1", "/mapping-get-v2"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");

        let res = client.post(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn test_path_variables() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/mapping/userA")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(server.url("/mapping/users/userA/orders/100"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(server.url("/mapping/users/userA/orders/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn test_param_condition() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.url("/mapping-param?mode=debug"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(server.url("/mapping-param")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_header_condition() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.url("/mapping-header"))
        .header("mode", "debug")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(server.url("/mapping-header")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_consumes_condition() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/mapping-consume"))
        .header(header::CONTENT_TYPE, "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(server.url("/mapping-consume"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_produces_condition() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/mapping-produce"))
        .header(header::ACCEPT, "text/plain")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "text/plain");

    let res = client
        .post(server.url("/mapping-produce"))
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE);
}
