//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → env.rs (APP_ENV, APP_NAME, ... overrides)
//!     → validation.rs (semantic checks)
//!     → DiagConfig (validated, immutable)
//!     → shared via Arc to every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError};
pub use schema::{
    AppConfig, CacheConfig, DatabaseConfig, DiagConfig, ListenerConfig, LogFormat,
    ObservabilityConfig, RuntimeConfig, SessionConfig, TimeoutConfig, TlsConfig,
};
pub use validation::ValidationError;
