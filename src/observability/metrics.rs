//! Metrics collection and exposition.
//!
//! # Metrics
//! - `diag_requests_total` (counter): requests by method, path, status
//! - `diag_request_duration_seconds` (histogram): latency by path
//!
//! Paths outside the endpoint table are folded into `unmatched` and
//! extension methods into `other` to keep label cardinality bounded.
//! This is the Prometheus side channel; the JSON `/metrics` endpoint is
//! served by the endpoints module.

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

use crate::routing::Endpoint;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Prometheus exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Label used for the request path.
pub fn path_label(path: &str) -> &'static str {
    Endpoint::from_path(path).map(Endpoint::path).unwrap_or("unmatched")
}

/// Label used for the request method.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "OPTIONS" => "OPTIONS",
        "CONNECT" => "CONNECT",
        "TRACE" => "TRACE",
        _ => "other",
    }
}

pub fn record_request(method: &'static str, status: u16, path: &'static str, start: Instant) {
    metrics::counter!(
        "diag_requests_total",
        "method" => method,
        "path" => path,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("diag_request_duration_seconds", "path" => path)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every request.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = method_label(request.method());
    let path = path_label(request.uri().path());

    let response = next.run(request).await;
    record_request(method, response.status().as_u16(), path, start);
    response
}
