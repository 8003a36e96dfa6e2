//! Shared building blocks for the Geekbot client crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `observability`: `tracing` subscriber setup driven by `GEEKBOT_LOG_LEVEL`
//! - `runtime`: async resilience primitives (rate limiter, retry executor)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Observability tier
// --------------------------------------------------------------
#[cfg(feature = "observability")]
pub mod observability;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod resilience;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "observability")]
pub use observability::{init_logging, level_from_env, parse_level};
#[cfg(feature = "runtime")]
pub use resilience::{
    BackoffStrategy, ConfigError, Jitter, RetryConfig, RetryConfigBuilder, RetryDecision,
    RetryExecutor, RetryOutcome, RetryPolicy, SlidingWindowConfig, SlidingWindowLimiter,
};
