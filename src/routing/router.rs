//! Attaching mapping conditions to routes.
//!
//! # Responsibilities
//! - Collect conditions for one route
//! - Reject non-matching requests before the handler runs
//!
//! # Design Decisions
//! - Conditions are checked after path and method matching
//! - The first failing condition decides the status code

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::http::response::error_response;
use crate::routing::matcher::{
    AndMatcher, ConsumesMatcher, HeaderMatcher, Matcher, ParamMatcher, ProducesMatcher,
};

/// Builder for the extra conditions of a single route.
#[derive(Debug, Default)]
pub struct Conditions {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a query parameter expression such as `mode=debug`.
    pub fn params(mut self, expression: &str) -> Self {
        self.matchers.push(Box::new(ParamMatcher::new(expression)));
        self
    }

    /// Require a header expression such as `mode=debug`.
    pub fn headers(mut self, expression: &str) -> Self {
        self.matchers.push(Box::new(HeaderMatcher::new(expression)));
        self
    }

    /// Require a `Content-Type` such as `application/json`.
    pub fn consumes(mut self, media_type: &str) -> Self {
        self.matchers.push(Box::new(ConsumesMatcher::new(media_type)));
        self
    }

    /// Require the client to accept a media type such as `text/plain`.
    pub fn produces(mut self, media_type: &str) -> Self {
        self.matchers.push(Box::new(ProducesMatcher::new(media_type)));
        self
    }

    /// Guard `route` with these conditions.
    pub fn apply<S>(self, route: MethodRouter<S>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let matcher = Arc::new(AndMatcher::new(self.matchers));
        route.route_layer(middleware::from_fn_with_state(matcher, enforce_conditions))
    }
}

async fn enforce_conditions(
    State(matcher): State<Arc<AndMatcher>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(failed) = matcher.first_mismatch(&request) {
        let status = failed.mismatch_status();
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            condition = ?failed,
            status = %status,
            "Request mapping condition not met"
        );
        return error_response(status, "request does not satisfy the mapping conditions");
    }
    next.run(request).await
}
