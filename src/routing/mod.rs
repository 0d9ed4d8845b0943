//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (exact path lookup in the endpoint table)
//!     → GET on a known path: endpoint handler
//!     → anything else: 404
//! ```
//!
//! # Design Decisions
//! - Routes fixed at compile time, immutable at runtime
//! - Exact matching only: no parameters, no wildcards, no prefixes
//! - Wrong method on a known path is a 404, not a 405

pub mod router;

pub use router::{build_routes, Endpoint};
