//! Fallback and failure responses.
//!
//! # Design Decisions
//! - Unknown routes get a plain-text 404
//! - A panicking endpoint still answers 200 with its report built from
//!   default configuration, so monitors never see a 5xx from a known route

use std::any::Any;

use axum::{
    body::Body,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::collectors::{DeploymentInfo, MemorySnapshot};
use crate::config::DiagConfig;
use crate::endpoints::banner;
use crate::endpoints::reports::{HealthReport, MetricsReport, SecurityReport, StatusReport};
use crate::routing::Endpoint;

/// Response for any path or method outside the route table.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Best-effort body for `endpoint`, built from defaults only.
pub fn default_response(endpoint: Endpoint) -> Response {
    let config = DiagConfig::default();
    let now = Utc::now();
    match endpoint {
        Endpoint::Root => Html(banner::render(now)).into_response(),
        Endpoint::Health => Json(HealthReport::collect(&config, now)).into_response(),
        Endpoint::Status => {
            Json(StatusReport::collect(&config, &DeploymentInfo::default(), now)).into_response()
        }
        Endpoint::Security => Json(SecurityReport::collect(&config)).into_response(),
        Endpoint::Metrics => {
            Json(MetricsReport::collect(&config, MemorySnapshot::default())).into_response()
        }
    }
}

/// Panic handler for `endpoint`: log the panic, answer with [`default_response`].
pub fn panic_fallback(
    endpoint: Endpoint,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response<Body> + Clone + Send + Sync + 'static {
    move |err| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "unknown panic"
        };
        tracing::error!(path = endpoint.path(), panic = %detail, "Handler panicked, serving defaults");
        default_response(endpoint)
    }
}
