//! API client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_ENV: &str = "DELFOS_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "DELFOS_REQUEST_TIMEOUT_SECS";

/// Where the REST backend lives and how long a request may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    /// Per-request deadline; `None` disables it.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from environment variables.
    ///
    /// Optional:
    /// - `DELFOS_API_BASE_URL`: default `http://localhost:8000`
    /// - `DELFOS_REQUEST_TIMEOUT_SECS`: default 30, `0` disables the deadline
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        let timeout = std::env::var(TIMEOUT_ENV).ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    /// Build from optional raw values, as read from the environment or baked
    /// in at compile time.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let base_url = base_url.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
        let secs = timeout_secs
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        Self::new(base_url).with_timeout(timeout)
    }

    /// Join an API path (`/api/...`) onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
