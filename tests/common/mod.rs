//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use mvc_basic::config::AppConfig;
use mvc_basic::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral port; stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the full application with `config` on 127.0.0.1.
pub async fn start_server_with(mut config: AppConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    TestServer { addr, shutdown }
}

pub async fn start_server() -> TestServer {
    start_server_with(AppConfig::default()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
