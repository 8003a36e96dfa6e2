//! Resilience patterns for calling rate-limited remote services
//!
//! This module provides **generic, reusable** building blocks:
//! - **Sliding-window rate limiter**: holds callers back once a request
//!   budget for the trailing window is spent
//! - **Retry executor**: bounded retries with exponential backoff and jitter,
//!   driven by a pluggable [`RetryPolicy`]
//!
//! Neither primitive knows about HTTP or about a particular error type; the
//! client layer supplies both the operation and the policy.

pub mod rate_limiter;
pub mod retry;

use thiserror::Error;

/// Invalid configuration for one of the resilience primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {component} configuration: {message}")]
pub struct ConfigError {
    pub component: &'static str,
    pub message: String,
}

impl ConfigError {
    pub fn new(component: &'static str, message: impl Into<String>) -> Self {
        Self { component, message: message.into() }
    }
}

// Re-export rate limiter types
pub use rate_limiter::{SlidingWindowConfig, SlidingWindowLimiter};
// Re-export retry types
pub use retry::{
    BackoffStrategy, Jitter, RetryConfig, RetryConfigBuilder, RetryDecision,
    RetryExecutor, RetryOutcome, RetryPolicy,
};
