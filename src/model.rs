//! Value objects exchanged with clients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binding::{BindError, BindParams, RequestParams};

/// A user name and age, bound from request parameters or a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HelloData {
    pub username: String,
    pub age: i32,
}

impl HelloData {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: username.into(),
            age,
        }
    }
}

impl fmt::Display for HelloData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HelloData(username={}, age={})", self.username, self.age)
    }
}

impl BindParams for HelloData {
    fn bind(params: &RequestParams) -> Result<Self, BindError> {
        let mut data = Self::default();
        if let Some(username) = params.first("username") {
            data.username = username.to_string();
        }
        if let Some(age) = params.optional("age")? {
            data.age = age;
        }
        Ok(data)
    }
}
