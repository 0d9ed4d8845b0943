//! Deployment metadata injected by the CI/CD pipeline.

/// Name of the pipeline that ships this service.
pub const CI_CD_PIPELINE: &str = "GitHub Actions";

/// Commit reported when `GITHUB_SHA` is unset.
pub const DEFAULT_COMMIT_SHA: &str = "local";

/// Snapshot of the deployment environment variables, taken once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentInfo {
    /// `GITHUB_SHA`, or "local".
    pub commit_sha: String,

    /// `DEPLOYED_AT`; when absent the request time is reported instead.
    pub deployed_at: Option<String>,
}

impl Default for DeploymentInfo {
    fn default() -> Self {
        Self {
            commit_sha: DEFAULT_COMMIT_SHA.to_string(),
            deployed_at: None,
        }
    }
}

impl DeploymentInfo {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            commit_sha: non_empty("GITHUB_SHA").unwrap_or_else(|| DEFAULT_COMMIT_SHA.to_string()),
            deployed_at: non_empty("DEPLOYED_AT"),
        }
    }

    /// Deploy time to report, falling back to `now`.
    pub fn deployed_at_or(&self, now: &str) -> String {
        self.deployed_at.clone().unwrap_or_else(|| now.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let info = DeploymentInfo::from_lookup(|_| None);
        assert_eq!(info.commit_sha, "local");
        assert_eq!(info.deployed_at_or("2024-01-01T00:00:00.000000Z"), "2024-01-01T00:00:00.000000Z");
    }

    #[test]
    fn test_values_from_environment() {
        let info = DeploymentInfo::from_lookup(|key| match key {
            "GITHUB_SHA" => Some("abc123".into()),
            "DEPLOYED_AT" => Some("2024-06-01T10:00:00Z".into()),
            _ => None,
        });
        assert_eq!(info.commit_sha, "abc123");
        assert_eq!(info.deployed_at_or("ignored"), "2024-06-01T10:00:00Z");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let info = DeploymentInfo::from_lookup(|_| Some(String::new()));
        assert_eq!(info, DeploymentInfo::default());
    }
}
