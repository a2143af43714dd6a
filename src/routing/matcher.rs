//! Request-mapping conditions.
//!
//! # Responsibilities
//! - Match query parameters and headers by presence or value
//! - Match `Content-Type` against consumable media types
//! - Match `Accept` against producible media types
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Header names are case-insensitive, parameter names are not
//! - Missing `Content-Type` is treated as `application/octet-stream`
//! - Missing `Accept` accepts anything

use axum::body::Body;
use axum::http::{header, Request, StatusCode};

use crate::binding::RequestParams;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;

    /// Status reported when the request does not match.
    fn mismatch_status(&self) -> StatusCode;
}

/// A `name`, `!name`, `name=value` or `name!=value` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValueExpression {
    name: String,
    value: Option<String>,
    negated: bool,
}

impl NameValueExpression {
    pub fn parse(expression: &str) -> Self {
        if let Some((name, value)) = expression.split_once("!=") {
            return Self {
                name: name.trim().to_string(),
                value: Some(value.trim().to_string()),
                negated: true,
            };
        }
        if let Some((name, value)) = expression.split_once('=') {
            return Self {
                name: name.trim().to_string(),
                value: Some(value.trim().to_string()),
                negated: false,
            };
        }
        match expression.trim().strip_prefix('!') {
            Some(name) => Self {
                name: name.trim().to_string(),
                value: None,
                negated: true,
            },
            None => Self {
                name: expression.trim().to_string(),
                value: None,
                negated: false,
            },
        }
    }

    fn evaluate<'a>(&self, mut values: impl Iterator<Item = &'a str>) -> bool {
        let found = match &self.value {
            Some(expected) => values.any(|v| v == expected.as_str()),
            None => values.next().is_some(),
        };
        found != self.negated
    }
}

/// Matches query parameters.
#[derive(Debug, Clone)]
pub struct ParamMatcher {
    expression: NameValueExpression,
}

impl ParamMatcher {
    pub fn new(expression: &str) -> Self {
        Self {
            expression: NameValueExpression::parse(expression),
        }
    }
}

impl Matcher for ParamMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        let params = RequestParams::parse(req.uri().query(), None);
        self.expression
            .evaluate(params.all(&self.expression.name).into_iter())
    }

    fn mismatch_status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Matches request headers.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    expression: NameValueExpression,
}

impl HeaderMatcher {
    pub fn new(expression: &str) -> Self {
        let mut expression = NameValueExpression::parse(expression);
        expression.name = expression.name.to_lowercase();
        Self { expression }
    }
}

impl Matcher for HeaderMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        let values = req
            .headers()
            .get_all(self.expression.name.as_str())
            .iter()
            .filter_map(|v| v.to_str().ok());
        self.expression.evaluate(values)
    }

    fn mismatch_status(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

/// A `type/subtype` media type, either part may be `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    kind: String,
    subtype: String,
}

impl MediaType {
    /// Parse a media type, dropping any `;` parameters.
    pub fn parse(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim().to_ascii_lowercase();
        let (kind, subtype) = essence.split_once('/')?;
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }
        Some(Self {
            kind: kind.to_string(),
            subtype: subtype.to_string(),
        })
    }

    /// Whether `other` falls within this (possibly wildcard) type.
    pub fn includes(&self, other: &MediaType) -> bool {
        (self.kind == "*" || self.kind == other.kind)
            && (self.subtype == "*" || self.subtype == other.subtype)
    }

    /// Exact `type/subtype` comparison, ignoring case.
    pub fn is(&self, kind: &str, subtype: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind) && self.subtype.eq_ignore_ascii_case(subtype)
    }

    /// Whether either type includes the other.
    pub fn is_compatible_with(&self, other: &MediaType) -> bool {
        self.includes(other) || other.includes(self)
    }
}

#[derive(Debug, Clone)]
struct MediaTypeExpression {
    media_type: MediaType,
    negated: bool,
}

impl MediaTypeExpression {
    fn parse(expression: &str) -> Option<Self> {
        let trimmed = expression.trim();
        let (negated, raw) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        MediaType::parse(raw).map(|media_type| Self {
            media_type,
            negated,
        })
    }
}

/// Matches the request `Content-Type`.
#[derive(Debug, Clone)]
pub struct ConsumesMatcher {
    expression: Option<MediaTypeExpression>,
}

impl ConsumesMatcher {
    pub fn new(expression: &str) -> Self {
        Self {
            expression: MediaTypeExpression::parse(expression),
        }
    }
}

impl Matcher for ConsumesMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        let Some(expression) = &self.expression else {
            return false;
        };
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream");
        match MediaType::parse(content_type) {
            Some(actual) => expression.media_type.includes(&actual) != expression.negated,
            None => false,
        }
    }

    fn mismatch_status(&self) -> StatusCode {
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    }
}

/// Matches the request `Accept` list.
#[derive(Debug, Clone)]
pub struct ProducesMatcher {
    expression: Option<MediaTypeExpression>,
}

impl ProducesMatcher {
    pub fn new(expression: &str) -> Self {
        Self {
            expression: MediaTypeExpression::parse(expression),
        }
    }
}

impl Matcher for ProducesMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        let Some(expression) = &self.expression else {
            return false;
        };
        let accepted: Vec<MediaType> = req
            .headers()
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .filter_map(MediaType::parse)
            .collect();
        if accepted.is_empty() {
            return true;
        }
        let compatible = accepted
            .iter()
            .any(|media_type| media_type.is_compatible_with(&expression.media_type));
        compatible != expression.negated
    }

    fn mismatch_status(&self) -> StatusCode {
        StatusCode::NOT_ACCEPTABLE
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug, Default)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// The first matcher the request fails, if any.
    pub fn first_mismatch(&self, req: &Request<Body>) -> Option<&dyn Matcher> {
        self.matchers
            .iter()
            .find(|m| !m.matches(req))
            .map(|m| &**m)
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.first_mismatch(req).is_none()
    }

    fn mismatch_status(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}
