//! LAMP stack diagnostic server.
//!
//! Serves five read-only endpoints describing the running deployment:
//!
//! ```text
//!   GET /          HTML deployment banner
//!   GET /health    liveness report (always 200)
//!   GET /status    application / system / services / deployment
//!   GET /security  recommended security headers
//!   GET /metrics   memory usage and backend drivers
//! ```
//!
//! Configuration comes from an optional TOML file plus `APP_*` style
//! environment overrides, and is immutable for the life of the process.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use lamp_diag::config::resolve_config;
use lamp_diag::lifecycle::{shutdown_signal, Shutdown};
use lamp_diag::observability::{logging, metrics};
use lamp_diag::HttpServer;

#[derive(Parser)]
#[command(name = "lamp-diag")]
#[command(about = "Diagnostic HTTP endpoints for the LAMP stack deployment", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "LAMP_DIAG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.bind.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("lamp-diag v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        app = %config.app.name,
        environment = %config.app.env,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let tls = config.listener.tls.clone();
    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config);

    match tls {
        Some(tls) => {
            let addr: SocketAddr = bind_address.parse()?;
            server.run_tls(addr, &tls, server_shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, server_shutdown).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
