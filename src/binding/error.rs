//! Binding failures and their HTTP mapping.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection, StringRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::response::error_response;

/// Error raised while turning request data into handler arguments.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("required parameter '{name}' is not present")]
    MissingParameter { name: String },

    #[error("parameter '{name}' has value '{value}' which is not a valid {expected}")]
    TypeMismatch {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Body(#[from] BytesRejection),

    #[error(transparent)]
    Text(#[from] StringRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl BindError {
    pub fn status(&self) -> StatusCode {
        match self {
            BindError::MissingParameter { .. }
            | BindError::TypeMismatch { .. }
            | BindError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            BindError::Json(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            BindError::Json(JsonRejection::BytesRejection(rejection)) => rejection.status(),
            BindError::Json(_) => StatusCode::BAD_REQUEST,
            BindError::Body(rejection) => rejection.status(),
            BindError::Text(rejection) => rejection.status(),
            BindError::Path(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for BindError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request binding failed");
        error_response(status, self.to_string())
    }
}
