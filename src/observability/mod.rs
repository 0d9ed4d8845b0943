//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Prometheus scrape endpoint (optional, separate listener)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
