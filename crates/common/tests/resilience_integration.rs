//! Integration tests for resilience module
//!
//! Exercises the sliding-window limiter and the retry executor together with
//! a paused tokio clock, so every wait is exact.

#![cfg(feature = "runtime")]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use geekbot_common::resilience::{
    RetryConfig, RetryDecision, RetryExecutor, RetryPolicy, SlidingWindowConfig,
    SlidingWindowLimiter,
};
use tokio::time::Instant;

/// Custom error type for testing
#[derive(Debug, Clone, PartialEq)]
struct TestError {
    message: String,
    retryable: bool,
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

struct RetryableOnly;

impl RetryPolicy<TestError> for RetryableOnly {
    fn should_retry(&self, error: &TestError, _attempt: u32) -> RetryDecision {
        if error.retryable {
            RetryDecision::Retry
        } else {
            RetryDecision::Stop
        }
    }
}

/// Fewer than `limit` requests inside one window are admitted immediately.
#[tokio::test(start_paused = true)]
async fn test_limiter_admits_below_limit_without_waiting() {
    let limiter = SlidingWindowLimiter::new(SlidingWindowConfig::per_minute(10)).unwrap();
    let start = Instant::now();

    for _ in 0..9 {
        assert_eq!(limiter.acquire().await, Duration::ZERO);
        tokio::time::advance(Duration::from_secs(1)).await;
    }

    // Only the manual advances elapsed.
    assert_eq!(start.elapsed(), Duration::from_secs(9));
}

/// The (limit + 1)-th request waits until the oldest entry leaves the window.
#[tokio::test(start_paused = true)]
async fn test_limiter_blocks_until_oldest_entry_expires() {
    let limiter = SlidingWindowLimiter::new(SlidingWindowConfig::per_minute(3)).unwrap();

    limiter.acquire().await; // t = 0
    tokio::time::advance(Duration::from_secs(10)).await;
    limiter.acquire().await; // t = 10
    tokio::time::advance(Duration::from_secs(10)).await;
    limiter.acquire().await; // t = 20

    let before = Instant::now();
    let waited = limiter.acquire().await;

    assert_eq!(waited, Duration::from_secs(40));
    assert_eq!(before.elapsed(), Duration::from_secs(40));
    assert_eq!(limiter.in_flight_window().await, 3);
}

/// Concurrent callers on clones of one limiter share the budget.
#[tokio::test(start_paused = true)]
async fn test_limiter_serialises_concurrent_callers() {
    let limiter = SlidingWindowLimiter::new(SlidingWindowConfig::per_minute(2)).unwrap();
    let start = Instant::now();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let limiter = limiter.clone();
            tokio::spawn(async move { limiter.acquire().await })
        })
        .collect();

    let mut waits = Vec::new();
    for handle in handles {
        waits.push(handle.await.unwrap());
    }
    waits.sort();

    assert_eq!(waits, vec![Duration::ZERO, Duration::ZERO, Duration::from_secs(60)]);
    assert_eq!(start.elapsed(), Duration::from_secs(60));
}

/// A non-retryable error stops the loop on the first attempt.
#[tokio::test(start_paused = true)]
async fn test_retry_stops_on_non_retryable_error() {
    let executor = RetryExecutor::new(RetryConfig::default(), RetryableOnly);
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = Arc::clone(&calls);

    let outcome = executor
        .execute(|| {
            let calls = Arc::clone(&calls_clone);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(TestError { message: "denied".into(), retryable: false })
            }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(outcome.result.unwrap_err().message, "denied");
}

/// Default configuration: three attempts with exponential delays.
#[tokio::test(start_paused = true)]
async fn test_retry_recovers_within_default_budget() {
    let executor = RetryExecutor::new(RetryConfig::default(), RetryableOnly);
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = Arc::clone(&calls);

    let outcome = executor
        .execute(|| {
            let calls = Arc::clone(&calls_clone);
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(TestError { message: "flaky".into(), retryable: true })
                } else {
                    Ok("done")
                }
            }
        })
        .await;

    assert_eq!(outcome.attempts, 3);
    assert_eq!(outcome.result, Ok("done"));
    // Equal jitter keeps each delay within [d/2, d] of 500ms and 1s.
    assert!(outcome.total_delay >= Duration::from_millis(750));
    assert!(outcome.total_delay <= Duration::from_millis(1500));
}
