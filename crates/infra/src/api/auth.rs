//! API key handling
//!
//! Geekbot accepts personal API keys (prefixed `api_`) verbatim in the
//! `Authorization` header; any other token is sent as a bearer token.

use std::fmt;
use std::sync::Arc;

use geekbot_domain::constants::API_KEY_PREFIX;
use geekbot_domain::{GeekbotError, Result};
use reqwest::header::HeaderValue;

/// Immutable credential shared by every request of one client
#[derive(Clone)]
pub struct Credential {
    key: Arc<str>,
}

impl Credential {
    /// Wrap an API key.
    ///
    /// # Errors
    ///
    /// Returns `GeekbotError::Config` when the key is blank.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(GeekbotError::Config("API key must not be empty".into()));
        }
        Ok(Self { key: Arc::from(key) })
    }

    /// True for personal `api_` keys, which are sent without a scheme.
    pub fn is_api_key(&self) -> bool {
        self.key.starts_with(API_KEY_PREFIX)
    }

    /// Value of the `Authorization` header, marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns `GeekbotError::Config` if the key contains characters that are
    /// not allowed in a header.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let raw = if self.is_api_key() {
            self.key.to_string()
        } else {
            format!("Bearer {}", self.key)
        };
        let mut value = HeaderValue::from_str(&raw).map_err(|_| {
            GeekbotError::Config("API key contains characters not valid in a header".into())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("key", &"<redacted>").finish()
    }
}
