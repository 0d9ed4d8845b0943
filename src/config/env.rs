//! Environment variable overlay.
//!
//! Mirrors the `.env` convention the deployment already uses: a handful of
//! well-known variables override whatever the config file says. Overrides
//! never fail; a value that cannot be parsed is logged and skipped.

use crate::config::schema::DiagConfig;

/// Apply environment overrides using `lookup` to resolve variable names.
///
/// Taking the lookup as a closure keeps this testable without touching the
/// real process environment.
pub fn apply_env_overrides<F>(config: &mut DiagConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let string = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = string("APP_NAME") {
        config.app.name = v;
    }
    if let Some(v) = string("APP_ENV") {
        config.app.env = v;
    }
    if let Some(v) = string("APP_TIMEZONE") {
        config.app.timezone = v;
    }
    if let Some(v) = string("CACHE_DRIVER") {
        config.cache.driver = v;
    }
    if let Some(v) = string("DB_CONNECTION") {
        config.database.default = v;
    }
    if let Some(v) = string("MEMORY_LIMIT") {
        config.runtime.memory_limit = v;
    }

    if let Some(v) = string("APP_DEBUG") {
        override_bool(&mut config.app.debug, "APP_DEBUG", &v);
    }
    if let Some(v) = string("SESSION_SECURE_COOKIE") {
        override_bool(&mut config.session.secure_cookie, "SESSION_SECURE_COOKIE", &v);
    }
}

fn override_bool(target: &mut bool, key: &str, raw: &str) {
    match parse_bool(raw) {
        Some(value) => *target = value,
        None => tracing::warn!(
            variable = key,
            value = raw,
            "Ignoring unparsable boolean environment override"
        ),
    }
}

/// Parse the boolean spellings accepted in `.env` files.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "(true)" => Some(true),
        "false" | "0" | "no" | "off" | "(false)" => Some(false),
        _ => None,
    }
}
