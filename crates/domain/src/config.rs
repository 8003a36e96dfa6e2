//! Client configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BACKOFF_MS,
    DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_TIMEOUT_SECS,
};
use crate::errors::{GeekbotError, Result};

/// Top-level client configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Geekbot API key (`api_...` keys are sent verbatim, others as bearer)
    pub api_key: String,
    pub base_url: String,
    /// Sliding-window ceiling shared by every call on one client
    pub rate_limit_per_minute: u32,
    /// Per-request transport timeout
    pub timeout_secs: u64,
    pub retry: RetrySettings,
}

impl ClientConfig {
    /// Configuration with defaults and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Self::default() }
    }

    /// Override the base URL (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rate_limit(mut self, per_minute: u32) -> Self {
        self.rate_limit_per_minute = per_minute;
        self
    }

    pub fn with_retry(mut self, retry: RetrySettings) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check invariants that do not need network access.
    ///
    /// # Errors
    /// Returns `GeekbotError::Config` for an empty key, a zero rate limit,
    /// a zero timeout or invalid retry settings.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(GeekbotError::Config("api_key must not be empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(GeekbotError::Config("base_url must not be empty".into()));
        }
        if self.rate_limit_per_minute == 0 {
            return Err(GeekbotError::Config("rate_limit_per_minute must be greater than 0".into()));
        }
        if self.timeout_secs == 0 {
            return Err(GeekbotError::Config("timeout_secs must be greater than 0".into()));
        }
        self.retry.validate()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetrySettings::default(),
        }
    }
}

// Manual impl so the key never lands in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("timeout_secs", &self.timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Retry/backoff settings for the dispatch core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetrySettings {
    /// Total attempts including the first one, at most 3
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl RetrySettings {
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 || self.max_attempts > DEFAULT_MAX_ATTEMPTS {
            return Err(GeekbotError::Config(format!(
                "retry.max_attempts must be between 1 and {DEFAULT_MAX_ATTEMPTS}"
            )));
        }
        if self.max_backoff_ms < self.initial_backoff_ms {
            return Err(GeekbotError::Config(
                "retry.max_backoff_ms must not be smaller than retry.initial_backoff_ms".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("api_key123");
        assert_eq!(config.base_url, "https://api.geekbot.com/v1");
        assert_eq!(config.rate_limit_per_minute, 60);
        assert_eq!(config.retry.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ClientConfig::default().validate().is_err());
        assert!(ClientConfig::new("k").with_rate_limit(0).validate().is_err());

        let retry = RetrySettings { max_attempts: 0, ..RetrySettings::default() };
        assert!(ClientConfig::new("k").with_retry(retry).validate().is_err());

        let retry =
            RetrySettings { initial_backoff_ms: 100, max_backoff_ms: 10, ..RetrySettings::default() };
        assert!(ClientConfig::new("k").with_retry(retry).validate().is_err());
    }

    #[test]
    fn test_attempt_budget_is_capped_at_three() {
        let retry = RetrySettings { max_attempts: 3, ..RetrySettings::default() };
        assert!(ClientConfig::new("k").with_retry(retry).validate().is_ok());

        let retry = RetrySettings { max_attempts: 6, ..RetrySettings::default() };
        let err = ClientConfig::new("k").with_retry(retry).validate().unwrap_err();
        assert!(matches!(err, GeekbotError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_key":"abc","retry":{"max_attempts":2}}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.initial_backoff_ms, 500);
        assert_eq!(config.rate_limit_per_minute, 60);
    }
}
