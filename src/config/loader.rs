//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::env::apply_env_overrides;
use crate::config::schema::DiagConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the effective configuration for the server process.
///
/// Starts from the file at `path` (or defaults when absent), overlays the
/// `APP_*` style environment variables and the `--bind` flag, then
/// validates the result.
pub fn resolve_config(path: Option<&Path>, bind: Option<&str>) -> Result<DiagConfig, ConfigError> {
    let content = path.map(fs::read_to_string).transpose()?;
    resolve_with(content.as_deref(), bind, |key| std::env::var(key).ok())
}

fn resolve_with<F>(content: Option<&str>, bind: Option<&str>, lookup: F) -> Result<DiagConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match content {
        Some(content) => toml::from_str(content)?,
        None => DiagConfig::default(),
    };

    apply_env_overrides(&mut config, lookup);
    if let Some(bind) = bind {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
