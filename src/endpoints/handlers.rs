use axum::{extract::State, response::Html, Json};

use crate::collectors::memory::MemorySnapshot;
use crate::endpoints::banner;
use crate::endpoints::reports::{HealthReport, MetricsReport, SecurityReport, StatusReport};
use crate::http::server::AppState;

pub async fn root(State(state): State<AppState>) -> Html<String> {
    Html(banner::render(state.clock.now()))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::collect(&state.config, state.clock.now()))
}

pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport::collect(
        &state.config,
        &state.deployment,
        state.clock.now(),
    ))
}

pub async fn security(State(state): State<AppState>) -> Json<SecurityReport> {
    Json(SecurityReport::collect(&state.config))
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(MetricsReport::collect(&state.config, MemorySnapshot::capture()))
}
