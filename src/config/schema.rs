//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! diagnostic server. All types derive Serde traits for deserialization
//! from config files, and every section falls back to its defaults so an
//! empty file (or no file at all) yields a runnable server.

use serde::{Deserialize, Serialize};

/// Root configuration for the diagnostic server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DiagConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Application identity reported by the endpoints.
    pub app: AppConfig,

    /// Cache backend settings.
    pub cache: CacheConfig,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Session cookie settings.
    pub session: SessionConfig,

    /// Runtime limits reported by `/metrics`.
    pub runtime: RuntimeConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Application identity.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Application name (`APP_NAME`).
    pub name: String,

    /// Environment name, e.g. "production" or "local" (`APP_ENV`).
    pub env: String,

    /// Debug flag (`APP_DEBUG`).
    pub debug: bool,

    /// Configured timezone identifier (`APP_TIMEZONE`).
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Laravel".to_string(),
            env: "production".to_string(),
            debug: false,
            timezone: "UTC".to_string(),
        }
    }
}

impl AppConfig {
    /// Whether the configured environment is exactly "production".
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}

/// Cache backend settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache driver name (`CACHE_DRIVER`).
    pub driver: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            driver: "file".to_string(),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Default connection name (`DB_CONNECTION`).
    pub default: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            default: "mysql".to_string(),
        }
    }
}

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether session cookies are marked `Secure` (`SESSION_SECURE_COOKIE`).
    pub secure_cookie: bool,
}

/// Runtime limits.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Memory limit as reported, "-1" meaning unlimited (`MEMORY_LIMIT`).
    pub memory_limit: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            memory_limit: "-1".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Prometheus endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
