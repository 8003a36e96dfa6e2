//! Geekbot API client with rate limiting and retry logic
//!
//! Every endpoint call goes through [`GeekbotClient::dispatch`], which admits
//! the attempt through the client's sliding-window limiter, attaches the
//! credential, maps non-2xx statuses to [`GeekbotError`] and retries
//! transient failures with exponential backoff.

use std::sync::Arc;

use geekbot_common::resilience::{
    RetryConfig, RetryDecision, RetryExecutor, RetryPolicy, SlidingWindowConfig,
    SlidingWindowLimiter,
};
use geekbot_core::StandupHelper;
use geekbot_domain::{ClientConfig, ErrorCategory, GeekbotError, Result, RetrySettings};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};
use url::Url;

use super::auth::Credential;
use crate::http::HttpClient;

/// Longest slice of an error body kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Retry rules for upstream calls
///
/// Server errors, rate limiting and transport failures are retried.
/// Authentication failures stop immediately, as does everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchRetryPolicy;

impl RetryPolicy<GeekbotError> for DispatchRetryPolicy {
    fn should_retry(&self, error: &GeekbotError, _attempt: u32) -> RetryDecision {
        match error.category() {
            ErrorCategory::Authentication => RetryDecision::Stop,
            _ if error.is_retryable() => RetryDecision::Retry,
            _ => RetryDecision::Stop,
        }
    }
}

/// Async Geekbot client
///
/// Cheap to clone; clones share the connection pool and the rate-limit
/// window. Separately constructed clients have independent budgets.
#[derive(Clone)]
pub struct GeekbotClient {
    http: HttpClient,
    credential: Credential,
    base_url: Arc<str>,
    limiter: SlidingWindowLimiter,
    retry: RetryExecutor<DispatchRetryPolicy>,
}

impl GeekbotClient {
    /// Client with default settings for the given API key.
    ///
    /// # Errors
    ///
    /// Returns `GeekbotError::Config` for a blank key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Client configured from `GEEKBOT_*` variables or a config file.
    ///
    /// # Errors
    ///
    /// Returns `GeekbotError::Config` when no usable configuration is found.
    pub fn from_env() -> Result<Self> {
        Self::from_config(crate::config::load()?)
    }

    /// Build a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeekbotError::Config` if the configuration does not validate
    /// or the transport cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;
        let credential = Credential::new(config.api_key.clone())?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = HttpClient::builder().timeout(config.timeout()).default_headers(headers).build()?;

        let limiter = SlidingWindowLimiter::new(SlidingWindowConfig::per_minute(
            config.rate_limit_per_minute,
        ))
        .map_err(|e| GeekbotError::Config(e.to_string()))?;

        let retry = RetryExecutor::new(retry_config(&config.retry)?, DispatchRetryPolicy);

        debug!(config = ?config, "Geekbot client created");

        Ok(Self { http, credential, base_url: Arc::from(base_url), limiter, retry })
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convenience operations bound to this client.
    pub fn helpers(&self) -> StandupHelper {
        StandupHelper::new(Arc::new(self.clone()))
    }

    /// Release this handle and its share of the connection pool.
    pub fn close(self) {
        info!(base_url = %self.base_url, "Closing Geekbot client");
        drop(self);
    }

    /// Send a request and return the raw body of the successful response.
    ///
    /// `body` is encoded once; every attempt reuses the same bytes.
    #[instrument(skip(self, query, body))]
    pub(crate) async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| GeekbotError::Encode(e.to_string()))?;

        let url = format!("{}{}", self.base_url, path);
        let url = url.as_str();
        let method = &method;
        let payload = payload.as_deref();

        let outcome =
            self.retry.execute(|| self.send_once(method.clone(), url, query, payload)).await;

        match outcome.result {
            Ok(bytes) => {
                debug!(attempts = outcome.attempts, bytes = bytes.len(), "Request succeeded");
                Ok(bytes)
            }
            Err(err) => {
                error!(attempts = outcome.attempts, error = %err, "Request failed");
                Err(err)
            }
        }
    }

    /// Dispatch and decode a JSON response body.
    pub(crate) async fn dispatch_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.dispatch(method, path, query, body).await?;
        decode_json(&bytes)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        self.dispatch_json::<(), T>(Method::GET, path, query, None).await
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        payload: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let waited = self.limiter.acquire().await;
        if !waited.is_zero() {
            debug!(waited_ms = waited.as_millis() as u64, "Rate limiter delayed request");
        }

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.credential.header_value()?);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.body(payload.to_vec());
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        // A body cut short mid-stream is a transport failure, not bad JSON.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeekbotError::Transport(format!("failed to read response body: {e}")))?
            .to_vec();

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(status_error(&method, url, status, &bytes))
        }
    }
}

impl std::fmt::Debug for GeekbotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeekbotClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("rate_limit", &self.limiter.config().limit)
            .finish()
    }
}

fn retry_config(settings: &RetrySettings) -> Result<RetryConfig> {
    RetryConfig::builder()
        .max_attempts(settings.max_attempts)
        .exponential_backoff(settings.initial_backoff(), 2.0, settings.max_backoff())
        .equal_jitter()
        .build()
        .map_err(|e| GeekbotError::Config(e.to_string()))
}

fn parse_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| GeekbotError::Config(format!("invalid base_url '{raw}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(GeekbotError::Config(format!("base_url must be http(s), got '{raw}'")));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn status_error(method: &Method, url: &str, status: StatusCode, body: &[u8]) -> GeekbotError {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    let message = if text.is_empty() {
        format!("{method} {url} returned status {status}")
    } else {
        let snippet: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{method} {url} returned status {status}: {snippet}")
    };
    GeekbotError::from_status(status.as_u16(), message)
}

pub(crate) fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| GeekbotError::Decode(e.to_string()))
}

/// Plain-text reply with surrounding double quotes removed.
pub(crate) fn decode_text(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| GeekbotError::Decode(format!("response body is not valid UTF-8: {e}")))?;
    Ok(text.trim_matches('"').to_string())
}
