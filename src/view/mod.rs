//! Named views rendered to HTML.
//!
//! # Data Flow
//! ```text
//! handler returns View { name, model }
//!     → resolver.rs (name → compiled-in template)
//!     → placeholders replaced with escaped model values
//!     → text/html response, or 500 when the view is unknown
//! ```

pub mod resolver;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::http::response::error_response;

pub use resolver::{render, ViewError};

/// A view name plus the attributes exposed to its template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    name: String,
    model: BTreeMap<String, String>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: BTreeMap::new(),
        }
    }

    pub fn with_model(name: impl Into<String>, model: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }

    /// A view named after the request path, e.g. `/response/hello`.
    pub fn from_path(path: &str) -> Self {
        Self::new(path.trim_start_matches('/'))
    }

    pub fn add_object(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.model.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &BTreeMap<String, String> {
        &self.model
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match render(&self) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!(view = %self.name, error = %e, "View rendering failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
