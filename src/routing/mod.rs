//! Request-mapping conditions.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method already matched by axum)
//!     → router.rs (per-route condition layer)
//!     → matcher.rs (params, headers, consumes, produces)
//!     → handler, or 400/404/415/406 error document
//! ```
//!
//! # Design Decisions
//! - Conditions are built once, when the router is assembled
//! - Deterministic: same input always yields the same decision

pub mod matcher;
pub mod router;

pub use router::Conditions;
