//! Responses rendered through named views.

use std::collections::BTreeMap;

use axum::{extract::OriginalUri, routing::any, Router};

use crate::view::View;

pub fn routes() -> Router {
    Router::new()
        .route("/response-view-v1", any(response_view_v1))
        .route("/response-view-v2", any(response_view_v2))
        .route("/response/hello", any(response_view_v3))
}

async fn response_view_v1() -> View {
    View::new("response/hello").add_object("data", "hello!")
}

/// Fills the model first, then picks the view.
async fn response_view_v2() -> View {
    let mut model = BTreeMap::new();
    model.insert("data".to_string(), "hello!".to_string());

    View::with_model("response/hello", model)
}

/// The view name is the request path.
async fn response_view_v3(OriginalUri(uri): OriginalUri) -> View {
    View::from_path(uri.path()).add_object("data", "hello!")
}
