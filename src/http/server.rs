//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the endpoint table
//! - Wire up middleware (tracing, request ID, timeout, metrics)
//! - Bind server to a plain TCP listener or a TLS address
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{body::Body, http::Request, middleware, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::collectors::{Clock, DeploymentInfo, SystemClock};
use crate::config::{DiagConfig, TlsConfig};
use crate::http::request::{request_id_of, MakeRequestUuidV4};
use crate::net::tls::{load_tls_config, TlsError};
use crate::observability::metrics::track_metrics;
use crate::routing::build_routes;

/// Application state injected into handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<DiagConfig>,
    pub deployment: Arc<DeploymentInfo>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: DiagConfig, deployment: DeploymentInfo, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            deployment: Arc::new(deployment),
            clock,
        }
    }
}

/// Error type for running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] TlsError),
}

/// HTTP server for the diagnostic endpoints.
pub struct HttpServer {
    router: Router,
    config: Arc<DiagConfig>,
}

impl HttpServer {
    /// Create a server reading deployment metadata from the process
    /// environment and time from the system clock.
    pub fn new(config: DiagConfig) -> Self {
        let state = AppState::new(config, DeploymentInfo::from_env(), Arc::new(SystemClock::new()));
        Self::with_state(state)
    }

    /// Create a server around prepared state.
    pub fn with_state(state: AppState) -> Self {
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DiagConfig, state: AppState) -> Router {
        build_routes()
            .with_state(state)
            .layer(middleware::from_fn(track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id_of(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DiagConfig {
        &self.config
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on `addr` until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: &TlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let rustls = load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTPS server draining");
            drain.graceful_shutdown(Some(Duration::from_secs(10)));
        });

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(app)
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::FixedClock;
    use axum::http::{Method, StatusCode};
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = DiagConfig::default();
        config.app.name = "LAMP".into();
        config.app.env = "production".into();
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        HttpServer::with_state(AppState::new(config, DeploymentInfo::default(), Arc::new(clock)))
    }

    async fn call(method: Method, path: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        server().router().oneshot(request).await.unwrap()
    }

    async fn json(path: &str) -> serde_json::Value {
        let response = call(Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_scenario() {
        let body = json("/health").await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["app"], "LAMP");
        assert_eq!(body["environment"], "production");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["timestamp"], "2024-05-01T12:00:00.000000Z");
    }

    #[tokio::test]
    async fn test_all_json_endpoints_ok() {
        for path in ["/health", "/status", "/security", "/metrics"] {
            json(path).await;
        }
    }

    #[tokio::test]
    async fn test_root_is_html() {
        let response = call(Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Laravel LAMP Stack"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_for_any_method() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let response = call(method.clone(), "/does-not-exist").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        }
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_is_404() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = call(method.clone(), "/health").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_not_matched() {
        let response = call(Method::GET, "/health/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_generated_and_propagated() {
        let response = call(Method::GET, "/health").await;
        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());

        let request = Request::builder()
            .uri("/status")
            .header("x-request-id", "trace-me")
            .body(Body::empty())
            .unwrap();
        let response = server().router().oneshot(request).await.unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
    }

    #[tokio::test]
    async fn test_security_headers_not_emitted() {
        let response = call(Method::GET, "/security").await;
        assert!(response.headers().get("x-frame-options").is_none());
        assert!(response.headers().get("content-security-policy").is_none());
    }

    #[tokio::test]
    async fn test_repeated_calls_identical_with_fixed_clock() {
        for path in ["/health", "/status", "/security"] {
            let a = json(path).await;
            let b = json(path).await;
            assert_eq!(a, b, "{path}");
        }
    }
}
