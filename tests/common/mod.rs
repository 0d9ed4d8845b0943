//! Shared utilities for integration and load testing.

use std::time::Duration;
use tokio::net::TcpListener;

use lamp_diag::config::DiagConfig;
use lamp_diag::lifecycle::Shutdown;
use lamp_diag::HttpServer;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub base_url: String,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<()>,
}

/// Start the diagnostic server with `config` on 127.0.0.1:0.
pub async fn start_server(config: DiagConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        base_url: format!("http://{}", addr),
        shutdown,
        handle,
    }
}

/// Config matching the production deployment banner.
#[allow(dead_code)]
pub fn lamp_config() -> DiagConfig {
    let mut config = DiagConfig::default();
    config.app.name = "LAMP".into();
    config.app.env = "production".into();
    config
}
