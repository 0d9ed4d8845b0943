//! Route table.
//!
//! Every served path is listed in [`Endpoint::ALL`]; the axum router is
//! derived from that table so the two cannot drift apart.

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::endpoints::handlers;
use crate::http::response::{not_found, panic_fallback};
use crate::http::server::AppState;

/// The diagnostic endpoints, one per fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Root,
    Health,
    Status,
    Security,
    Metrics,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Root,
        Endpoint::Health,
        Endpoint::Status,
        Endpoint::Security,
        Endpoint::Metrics,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Root => "/",
            Endpoint::Health => "/health",
            Endpoint::Status => "/status",
            Endpoint::Security => "/security",
            Endpoint::Metrics => "/metrics",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.path() == path)
    }

    /// GET handler for this endpoint; any other method falls through to 404.
    /// A panic inside the handler is answered with the endpoint's defaults.
    fn method_router(self) -> MethodRouter<AppState> {
        let router = match self {
            Endpoint::Root => get(handlers::root),
            Endpoint::Health => get(handlers::health),
            Endpoint::Status => get(handlers::status),
            Endpoint::Security => get(handlers::security),
            Endpoint::Metrics => get(handlers::metrics),
        };
        router
            .fallback(not_found)
            .layer(CatchPanicLayer::custom(panic_fallback(self)))
    }
}

/// Build the routing table. Unmatched paths answer 404.
pub fn build_routes() -> Router<AppState> {
    Endpoint::ALL
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            router.route(endpoint.path(), endpoint.method_router())
        })
        .fallback(not_found)
}
