//! Typed client for the lamp-diag endpoints.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub app: String,
    pub version: String,
    pub environment: String,
    pub php_version: String,
    pub laravel_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub application: ApplicationInfo,
    pub system: SystemInfo,
    pub services: BTreeMap<String, String>,
    pub deployment: DeploymentInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub php_version: String,
    pub laravel_version: String,
    pub timestamp: String,
    pub uptime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentInfo {
    pub commit_sha: String,
    pub deployed_at: String,
    pub ci_cd_pipeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub security_headers: BTreeMap<String, String>,
    pub https_enforced: bool,
    pub session_secure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub memory_usage: MemoryUsage,
    pub cache_stats: DriverStatus,
    pub database_connections: ConnectionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub current: u64,
    pub peak: u64,
    pub limit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStatus {
    pub driver: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub default: String,
    pub status: String,
}

pub struct DiagClient {
    client: Client,
    base_url: String,
}

impl DiagClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The HTML banner served at `/`.
    pub async fn root(&self) -> Result<String, Box<dyn std::error::Error>> {
        let resp = self.client.get(format!("{}/", self.base_url)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("server returned error status {}: {}", status, text).into());
        }
        Ok(text)
    }

    pub async fn health(&self) -> Result<HealthReport, Box<dyn std::error::Error>> {
        self.get_json("/health").await
    }

    pub async fn status(&self) -> Result<StatusReport, Box<dyn std::error::Error>> {
        self.get_json("/status").await
    }

    pub async fn security(&self) -> Result<SecurityReport, Box<dyn std::error::Error>> {
        self.get_json("/security").await
    }

    pub async fn metrics(&self) -> Result<MetricsReport, Box<dyn std::error::Error>> {
        self.get_json("/metrics").await
    }

    /// Raw status code for an arbitrary method and path.
    pub async fn status_of(&self, method: reqwest::Method, path: &str) -> Result<StatusCode, reqwest::Error> {
        let resp = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(resp.status())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("server returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}
