//! Info collectors.
//!
//! # Data Flow
//! ```text
//! Request arrives
//!     → clock.rs (current timestamp, never moves backwards)
//!     → runtime.rs (rustc / axum version strings)
//!     → memory.rs (process RSS, current and peak)
//!     → deployment.rs (GITHUB_SHA / DEPLOYED_AT snapshot)
//!     → endpoints build a report from these facts
//! ```
//!
//! # Design Decisions
//! - Every collector is infallible; failures degrade to defaults
//! - Environment is read once at startup, never per request
//! - No collector performs I/O against other services

pub mod clock;
pub mod deployment;
pub mod memory;
pub mod runtime;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deployment::DeploymentInfo;
pub use memory::MemorySnapshot;
