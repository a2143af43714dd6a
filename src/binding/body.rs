//! Request body extraction: raw entities and JSON.

use axum::{
    extract::{FromRequest, Request},
    http::{HeaderMap, Method, Uri},
    Json,
};
use serde::de::DeserializeOwned;

use crate::binding::BindError;

/// Deserialize a text body that was read without a content-type check.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, BindError> {
    Ok(serde_json::from_str(body)?)
}

/// JSON body extractor. Requires `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// The whole request as one value: method, URI, headers and text body.
#[derive(Debug, Clone)]
pub struct RequestEntity {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

impl<S> FromRequest<S> for RequestEntity
where
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let headers = req.headers().clone();
        let bytes = axum::body::Bytes::from_request(req, state).await?;
        Ok(Self {
            method,
            uri,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HelloData;
    use axum::{body::Body, http::{header, StatusCode}};

    fn json_request(content_type: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/request-body-json-v3")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_parse_json() {
        let data: HelloData = parse_json(r#"{"username":"hello", "age":20}"#).unwrap();
        assert_eq!(data, HelloData::new("hello", 20));
        assert!(parse_json::<HelloData>("not json").is_err());
    }

    #[tokio::test]
    async fn test_json_body() {
        let req = json_request("application/json", r#"{"username":"userA","age":20}"#);
        let JsonBody(data) = JsonBody::<HelloData>::from_request(req, &()).await.unwrap();
        assert_eq!(data, HelloData::new("userA", 20));
    }

    #[tokio::test]
    async fn test_json_body_rejections() {
        let req = json_request("text/plain", r#"{"username":"userA","age":20}"#);
        let err = JsonBody::<HelloData>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let req = json_request("application/json", r#"{"username":"userA","age":"old"}"#);
        let err = JsonBody::<HelloData>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let req = json_request("application/json", "{");
        let err = JsonBody::<HelloData>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_entity() {
        let req = json_request("text/plain", "hello");
        let entity = RequestEntity::from_request(req, &()).await.unwrap();
        assert_eq!(entity.method, Method::POST);
        assert_eq!(entity.uri.path(), "/request-body-json-v3");
        assert_eq!(entity.body, "hello");
        assert_eq!(entity.headers[header::CONTENT_TYPE], "text/plain");
    }
}
