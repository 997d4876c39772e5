//! API Configuration
//!
//! The base URL is fixed at build time through `CASINO_BACKEND_URL`.

/// Used when `CASINO_BACKEND_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Read the override baked in by the build environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CASINO_BACKEND_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
