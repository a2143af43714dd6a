//! Request and response binding examples served over HTTP.

pub mod binding;
pub mod config;
pub mod controllers;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::HelloData;
