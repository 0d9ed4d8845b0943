//! Diagnostic endpoints.
//!
//! # Data Flow
//! ```text
//! GET /<endpoint>
//!     → handlers.rs (pull AppState: config, deployment snapshot, clock)
//!     → reports.rs (assemble a report from collector facts)
//!     → Json<Report> / Html<String> (banner.rs)
//! ```
//!
//! # Design Decisions
//! - Reports are built fresh per request and never cached
//! - Service and driver statuses are literals, not liveness checks
//! - The security report lists recommended headers; the server does not
//!   emit them itself

pub mod banner;
pub mod handlers;
pub mod reports;

pub use reports::{HealthReport, MetricsReport, SecurityReport, StatusReport};
