//! Request parameter extraction.
//!
//! Parameters come from the URL query string and, for requests carrying an
//! `application/x-www-form-urlencoded` body, from the form body. Query
//! parameters come first, then form parameters, each in wire order.

use std::any::type_name;
use std::collections::BTreeMap;
use std::str::FromStr;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, Method},
};

use crate::binding::BindError;
use crate::routing::matcher::MediaType;

/// All parameters of one request, in order, duplicates preserved.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    /// Parse a query string and an optional form body.
    pub fn parse(query: Option<&str>, form: Option<&[u8]>) -> Self {
        let mut pairs = Vec::new();
        if let Some(query) = query {
            pairs.extend(url::form_urlencoded::parse(query.as_bytes()).into_owned());
        }
        if let Some(form) = form {
            pairs.extend(url::form_urlencoded::parse(form).into_owned());
        }
        Self { pairs }
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// A parameter that must be present and must parse as `T`.
    pub fn required<T: FromStr>(&self, name: &str) -> Result<T, BindError> {
        let value = self.first(name).ok_or_else(|| BindError::MissingParameter {
            name: name.to_string(),
        })?;
        convert(name, value)
    }

    /// A parameter that may be absent. An empty value counts as absent
    /// unless `T` can be built from the empty string.
    pub fn optional<T: FromStr>(&self, name: &str) -> Result<Option<T>, BindError> {
        match self.first(name) {
            None => Ok(None),
            Some("") => Ok(T::from_str("").ok()),
            Some(value) => convert(name, value).map(Some),
        }
    }

    /// A parameter that falls back to `default` when absent or empty.
    pub fn with_default<T: FromStr>(&self, name: &str, default: T) -> Result<T, BindError> {
        match self.first(name) {
            None | Some("") => Ok(default),
            Some(value) => convert(name, value),
        }
    }

    /// First value of every parameter.
    pub fn to_single_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for (key, value) in &self.pairs {
            map.entry(key.clone()).or_insert_with(|| value.clone());
        }
        map
    }

    /// Every value of every parameter.
    pub fn to_multi_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in &self.pairs {
            map.entry(key.clone()).or_default().push(value.clone());
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn convert<T: FromStr>(name: &str, value: &str) -> Result<T, BindError> {
    value.parse().map_err(|_| BindError::TypeMismatch {
        name: name.to_string(),
        value: value.to_string(),
        expected: type_name::<T>(),
    })
}

fn has_form_body(req: &Request) -> bool {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return false;
    }
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(MediaType::parse)
        .is_some_and(|media_type| media_type.is("application", "x-www-form-urlencoded"))
}

impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        if has_form_body(&req) {
            let body = Bytes::from_request(req, state).await?;
            Ok(Self::parse(query.as_deref(), Some(body.as_ref())))
        } else {
            Ok(Self::parse(query.as_deref(), None))
        }
    }
}
