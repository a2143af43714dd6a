//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all controllers
//! - Wire up middleware (request id, tracing, timeout, body limit, metrics)
//! - Serve on a listener until shutdown is signalled

use std::time::Duration;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::controllers;
use crate::http::request::{MakeRequestUuid, RequestIdSpan};
use crate::http::response::not_found;
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics::track_metrics;

/// HTTP server for the handler catalog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: AppConfig) -> Self {
        Self {
            router: Self::build_router(&config),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig) -> Router {
        controllers::router()
            .route_layer(middleware::from_fn(track_metrics))
            .fallback(not_found)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(RequestIdSpan))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
