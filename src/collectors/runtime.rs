//! Runtime and framework version facts.

/// Application version reported by every endpoint.
pub const APP_VERSION: &str = "1.0.0";

/// HTTP framework version the server is built on.
pub const FRAMEWORK_VERSION: &str = "axum 0.8";

/// Version of the compiler that built this binary, captured by `build.rs`.
pub fn runtime_version() -> &'static str {
    env!("LAMP_DIAG_RUSTC_VERSION")
}

/// Version of the HTTP framework.
pub fn framework_version() -> &'static str {
    FRAMEWORK_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_not_empty() {
        assert!(!runtime_version().is_empty());
    }
}
