//! Request data binding.
//!
//! # Data Flow
//! ```text
//! Request (query string, headers, body)
//!     → params.rs (query + form parameters, typed lookups)
//!     → model.rs (parameters → object, property by property)
//!     → body.rs (raw entity, JSON body)
//!     → handler arguments, or BindError (error.rs) as the response
//! ```

pub mod body;
pub mod error;
pub mod model;
pub mod params;

pub use body::{parse_json, JsonBody, RequestEntity};
pub use error::BindError;
pub use model::{BindParams, ModelAttribute};
pub use params::RequestParams;
