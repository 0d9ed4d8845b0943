//! Report shapes returned by the JSON endpoints.
//!
//! Field names on the wire are a contract with external monitors. The
//! `php_version` / `laravel_version` keys are kept even though they carry
//! the rustc and axum versions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::collectors::clock::iso8601;
use crate::collectors::deployment::{DeploymentInfo, CI_CD_PIPELINE};
use crate::collectors::memory::MemorySnapshot;
use crate::collectors::runtime::{framework_version, runtime_version, APP_VERSION};
use crate::config::DiagConfig;

/// Literal reported for every entry in `services`.
pub const SERVICE_CONNECTED: &str = "Connected";

/// Literal reported as the cache status.
pub const CACHE_OPERATIONAL: &str = "operational";

/// Literal reported as the database status.
pub const DATABASE_CONNECTED: &str = "connected";

/// Placeholder reported as uptime; uptime is not tracked.
pub const UPTIME_PLACEHOLDER: &str = "Available in production";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    #[serde(rename = "app")]
    pub app_name: String,
    pub version: &'static str,
    pub environment: String,
    #[serde(rename = "php_version")]
    pub runtime_version: &'static str,
    #[serde(rename = "laravel_version")]
    pub framework_version: &'static str,
}

impl HealthReport {
    pub fn collect(config: &DiagConfig, now: DateTime<Utc>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: iso8601(now),
            app_name: config.app.name.clone(),
            version: APP_VERSION,
            environment: config.app.env.clone(),
            runtime_version: runtime_version(),
            framework_version: framework_version(),
        }
    }
}

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub application: ApplicationInfo,
    pub system: SystemInfo,
    pub services: ServicesInfo,
    pub deployment: DeploymentReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: &'static str,
    pub environment: String,
    pub debug: bool,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    pub php_version: &'static str,
    pub laravel_version: &'static str,
    pub timestamp: String,
    pub uptime: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesInfo {
    pub database: &'static str,
    pub cache: &'static str,
    pub queue: &'static str,
}

impl ServicesInfo {
    pub const STATIC: Self = Self {
        database: SERVICE_CONNECTED,
        cache: SERVICE_CONNECTED,
        queue: SERVICE_CONNECTED,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentReport {
    pub commit_sha: String,
    pub deployed_at: String,
    pub ci_cd_pipeline: &'static str,
}

impl StatusReport {
    pub fn collect(config: &DiagConfig, deployment: &DeploymentInfo, now: DateTime<Utc>) -> Self {
        let timestamp = iso8601(now);
        Self {
            application: ApplicationInfo {
                name: config.app.name.clone(),
                version: APP_VERSION,
                environment: config.app.env.clone(),
                debug: config.app.debug,
                timezone: config.app.timezone.clone(),
            },
            system: SystemInfo {
                php_version: runtime_version(),
                laravel_version: framework_version(),
                timestamp: timestamp.clone(),
                uptime: UPTIME_PLACEHOLDER,
            },
            services: ServicesInfo::STATIC,
            deployment: DeploymentReport {
                commit_sha: deployment.commit_sha.clone(),
                deployed_at: deployment.deployed_at_or(&timestamp),
                ci_cd_pipeline: CI_CD_PIPELINE,
            },
        }
    }
}

/// Recommended response headers, keyed by their HTTP names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityHeaders {
    #[serde(rename = "X-Frame-Options")]
    pub x_frame_options: &'static str,
    #[serde(rename = "X-XSS-Protection")]
    pub x_xss_protection: &'static str,
    #[serde(rename = "X-Content-Type-Options")]
    pub x_content_type_options: &'static str,
    #[serde(rename = "Referrer-Policy")]
    pub referrer_policy: &'static str,
    #[serde(rename = "Content-Security-Policy")]
    pub content_security_policy: &'static str,
}

impl SecurityHeaders {
    pub const RECOMMENDED: Self = Self {
        x_frame_options: "DENY",
        x_xss_protection: "1; mode=block",
        x_content_type_options: "nosniff",
        referrer_policy: "strict-origin-when-cross-origin",
        content_security_policy: "default-src 'self'",
    };
}

/// Body of `GET /security`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityReport {
    pub security_headers: SecurityHeaders,
    pub https_enforced: bool,
    pub session_secure: bool,
}

impl SecurityReport {
    pub fn collect(config: &DiagConfig) -> Self {
        Self {
            security_headers: SecurityHeaders::RECOMMENDED,
            https_enforced: config.app.is_production(),
            session_secure: config.session.secure_cookie,
        }
    }
}

/// Body of `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub memory_usage: MemoryUsage,
    pub cache_stats: CacheStats,
    pub database_connections: DatabaseConnections,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryUsage {
    pub current: u64,
    pub peak: u64,
    pub limit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub driver: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseConnections {
    pub default: String,
    pub status: &'static str,
}

impl MetricsReport {
    pub fn collect(config: &DiagConfig, memory: MemorySnapshot) -> Self {
        Self {
            memory_usage: MemoryUsage {
                current: memory.current,
                peak: memory.peak.max(memory.current),
                limit: config.runtime.memory_limit.clone(),
            },
            cache_stats: CacheStats {
                driver: config.cache.driver.clone(),
                status: CACHE_OPERATIONAL,
            },
            database_connections: DatabaseConnections {
                default: config.database.default.clone(),
                status: DATABASE_CONNECTED,
            },
        }
    }
}
