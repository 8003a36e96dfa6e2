//! Sliding-window rate limiting
//!
//! Keeps the admission timestamps of the last `window` and makes callers wait
//! once `limit` of them are in flight. The window is shared by every clone of
//! the limiter and every admission decision runs under one async lock, so
//! concurrent callers are admitted strictly one at a time.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use super::ConfigError;

/// Configuration for [`SlidingWindowLimiter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingWindowConfig {
    /// Maximum admissions per window
    pub limit: u32,
    /// Length of the sliding window
    pub window: Duration,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self { limit: 60, window: Duration::from_secs(60) }
    }
}

impl SlidingWindowConfig {
    /// Shorthand for the common "N requests per minute" case.
    pub fn per_minute(limit: u32) -> Self {
        Self { limit, window: Duration::from_secs(60) }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::new("rate limiter", "limit must be greater than 0"));
        }
        if self.window.is_zero() {
            return Err(ConfigError::new("rate limiter", "window must be greater than zero"));
        }
        Ok(())
    }
}

/// Sliding-window rate limiter
///
/// Cloning is cheap and clones share the same window. Time is read from
/// [`tokio::time::Instant`], so tests running with a paused clock see exact
/// waits.
///
/// # Examples
///
/// ```rust
/// use geekbot_common::resilience::{SlidingWindowConfig, SlidingWindowLimiter};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let limiter = SlidingWindowLimiter::new(SlidingWindowConfig::per_minute(60))?;
///
/// let waited = limiter.acquire().await;
/// assert!(waited.is_zero());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindowLimiter {
    config: SlidingWindowConfig,
    admitted: Arc<Mutex<VecDeque<Instant>>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the limit is zero or the window is empty.
    pub fn new(config: SlidingWindowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.limit as usize;
        Ok(Self { config, admitted: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))) })
    }

    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    /// Wait until one more request fits in the window, then record it.
    ///
    /// Returns how long the caller was held back (zero when admitted
    /// immediately).
    pub async fn acquire(&self) -> Duration {
        let mut admitted = self.admitted.lock().await;
        let started = Instant::now();

        Self::purge(&mut admitted, started, self.config.window);

        if admitted.len() >= self.config.limit as usize {
            if let Some(&oldest) = admitted.front() {
                let age = started.saturating_duration_since(oldest);
                let wait = self.config.window.saturating_sub(age);
                if !wait.is_zero() {
                    warn!(
                        wait_ms = wait.as_millis() as u64,
                        limit = self.config.limit,
                        "Rate limit window full, delaying request"
                    );
                    sleep(wait).await;
                }
            }
            Self::purge(&mut admitted, Instant::now(), self.config.window);
        }

        let now = Instant::now();
        admitted.push_back(now);
        let waited = now.saturating_duration_since(started);
        debug!(in_window = admitted.len(), waited_ms = waited.as_millis() as u64, "Request admitted");
        waited
    }

    /// Number of admissions still inside the window.
    pub async fn in_flight_window(&self) -> usize {
        let mut admitted = self.admitted.lock().await;
        Self::purge(&mut admitted, Instant::now(), self.config.window);
        admitted.len()
    }

    fn purge(admitted: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(&oldest) = admitted.front() {
            if now.saturating_duration_since(oldest) >= window {
                admitted.pop_front();
            } else {
                break;
            }
        }
    }
}
