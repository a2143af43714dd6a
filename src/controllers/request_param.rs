//! Query and form parameter binding.

use axum::{routing::any, Router};

use crate::binding::{BindError, BindParams, ModelAttribute, RequestParams};
use crate::model::HelloData;

pub fn routes() -> Router {
    Router::new()
        .route("/request-param-v1", any(request_param_v1))
        .route("/request-param-v2", any(request_param_v2))
        .route("/request-param-v3", any(request_param_v3))
        .route("/request-param-v4", any(request_param_v4))
        .route("/request-param-required", any(request_param_required))
        .route("/request-param-default", any(request_param_default))
        .route("/request-param-map", any(request_param_map))
        .route("/model-attribute-v1", any(model_attribute_v1))
        .route("/model-attribute-v2", any(model_attribute_v2))
}

/// Reads parameters off the raw parameter list, one lookup at a time.
async fn request_param_v1(params: RequestParams) -> Result<&'static str, BindError> {
    let username = params.first("username").unwrap_or_default().to_string();
    let age: i32 = params.required("age")?;

    tracing::info!(%username, age, "request-param-v1");
    Ok("ok")
}

/// Parameter names differ from the local names they bind to.
async fn request_param_v2(params: RequestParams) -> Result<&'static str, BindError> {
    let member_name: String = params.required("username")?;
    let member_age: i32 = params.required("age")?;

    tracing::info!(username = %member_name, age = member_age, "request-param-v2");
    Ok("ok")
}

async fn request_param_v3(params: RequestParams) -> Result<&'static str, BindError> {
    let username: String = params.required("username")?;
    let age: i32 = params.required("age")?;

    tracing::info!(%username, age, "request-param-v3");
    Ok("ok")
}

async fn request_param_v4(params: RequestParams) -> Result<&'static str, BindError> {
    let username: String = params.required("username")?;
    let age: i32 = params.required("age")?;

    tracing::info!(%username, age, "request-param-v4");
    Ok("ok")
}

/// `username` must be present (an empty value counts), `age` may be absent.
async fn request_param_required(params: RequestParams) -> Result<&'static str, BindError> {
    let username: String = params.required("username")?;
    let age: Option<i32> = params.optional("age")?;

    tracing::info!(%username, ?age, "request-param-required");
    Ok("ok")
}

async fn request_param_default(params: RequestParams) -> Result<&'static str, BindError> {
    let username = params.with_default("username", "guest".to_string())?;
    let age = params.with_default("age", -1i32)?;

    tracing::info!(%username, age, "request-param-default");
    Ok("ok")
}

async fn request_param_map(params: RequestParams) -> &'static str {
    let param_map = params.to_single_map();

    tracing::info!(
        username = ?param_map.get("username"),
        age = ?param_map.get("age"),
        "request-param-map"
    );
    "ok"
}

async fn model_attribute_v1(ModelAttribute(hello_data): ModelAttribute<HelloData>) -> &'static str {
    tracing::info!(username = %hello_data.username, age = hello_data.age, "model-attribute-v1");
    tracing::info!(%hello_data, "model-attribute-v1");
    "ok"
}

/// Same binding, through the trait directly.
async fn model_attribute_v2(params: RequestParams) -> Result<&'static str, BindError> {
    let hello_data = HelloData::bind(&params)?;

    tracing::info!(username = %hello_data.username, age = hello_data.age, "model-attribute-v2");
    tracing::info!(%hello_data, "model-attribute-v2");
    Ok("ok")
}
