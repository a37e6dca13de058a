//! Client configuration.

use std::time::Duration;

use crate::types::ApiUrl;

/// Path prefix prepended to descriptor paths when no base override is set.
pub const DEFAULT_API_PREFIX: &str = "api/v1";

/// Renewal endpoint, relative to the API prefix.
pub const DEFAULT_REFRESH_PATH: &str = "token/refresh/";

/// Deadline applied to time-bounded calls.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Settings for an API client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use newsdesk_core::{ApiUrl, ClientConfig};
///
/// let config = ClientConfig::new(ApiUrl::new("https://news.example.com").unwrap())
///     .with_read_timeout(Duration::from_secs(5));
/// assert_eq!(config.api_prefix, "api/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: ApiUrl,
    pub api_prefix: String,
    pub refresh_path: String,
    pub read_timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            read_timeout: DEFAULT_READ_TIMEOUT,
            user_agent: concat!("newsdesk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new(ApiUrl::new("http://localhost:8000").unwrap());
        assert_eq!(config.refresh_path, "token/refresh/");
        assert_eq!(config.read_timeout, Duration::from_millis(30_000));
        assert!(config.user_agent.starts_with("newsdesk/"));
    }
}
