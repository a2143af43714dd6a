//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request id, per-request span)
//!     → routing + controllers (binding, handler)
//!     → response.rs (error documents, fallback)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, RequestIdSpan, X_REQUEST_ID};
pub use server::HttpServer;
