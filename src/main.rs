//! mvc-basic: a catalog of HTTP request/response binding handlers.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ request id ─▶ trace span ─▶ timeout/body limit
//!                                                      │
//!                                                      ▼
//!                                     axum router (path + method)
//!                                                      │
//!                                                      ▼
//!                                  mapping conditions (params, headers,
//!                                  consumes, produces)
//!                                                      │
//!                                                      ▼
//!                                  binding (params, model, JSON, entity)
//!                                                      │
//!                                                      ▼
//!                                  controller ─▶ text / JSON / view
//!     ◀───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use mvc_basic::config::{load_config, AppConfig};
use mvc_basic::lifecycle::{signals, Shutdown};
use mvc_basic::observability::{logging, metrics};
use mvc_basic::HttpServer;

#[derive(Parser)]
#[command(name = "mvc-basic")]
#[command(about = "HTTP request and response binding examples", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener address, overrides the configuration file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);

    tracing::info!("mvc-basic v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
