//! Generic retry executor with exponential backoff and jitter
//!
//! The executor runs an async operation until it succeeds, the policy says
//! stop, or the attempt budget is spent. Failures are never wrapped: the
//! caller always gets the last error the operation produced.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, instrument, warn};

use super::ConfigError;

/// Outcome of a retry execution including result and summary statistics.
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    /// Final success value, or the last observed error
    pub result: Result<T, E>,
    /// Attempts made, including the first one
    pub attempts: u32,
    /// Sum of the backoff sleeps between attempts
    pub total_delay: Duration,
}

impl<T, E> RetryOutcome<T, E> {
    /// Consume the outcome and return only the result.
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Trait for determining whether an error should be retried
pub trait RetryPolicy<E> {
    /// `attempt` is zero-based: 0 is the first failure.
    fn should_retry(&self, error: &E, attempt: u32) -> RetryDecision;
}

/// Decision for whether to retry an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry the operation after the backoff delay
    Retry,
    /// Give up and surface the error
    Stop,
}

/// Exponential backoff: `initial_delay * base^attempt`, capped at `max_delay`
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffStrategy {
    pub initial_delay: Duration,
    pub base: f64,
    pub max_delay: Duration,
}

impl BackoffStrategy {
    /// Calculate the delay before retrying after failure number `attempt`
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let delay = self.initial_delay.as_millis() as f64 * self.base.powi(attempt as i32);
        let delay_ms = delay.min(self.max_delay.as_millis() as f64) as u64;
        Duration::from_millis(delay_ms)
    }
}

/// Jitter type for adding randomness to retry delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jitter {
    /// No jitter
    None,
    /// Equal jitter: calculated_delay/2 to calculated_delay
    Equal,
}

impl Jitter {
    /// Apply jitter to the calculated delay
    pub fn apply(&self, delay: Duration) -> Duration {
        match self {
            Jitter::None => delay,
            Jitter::Equal => {
                let half_ms = (delay.as_millis() / 2) as u64;
                let extra_ms = rand::thread_rng().gen_range(0..=half_ms);
                Duration::from_millis(half_ms + extra_ms)
            }
        }
    }
}

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Backoff strategy for calculating delays
    pub backoff: BackoffStrategy,
    /// Jitter type for randomizing delays
    pub jitter: Jitter,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: BackoffStrategy {
                initial_delay: Duration::from_millis(500),
                base: 2.0,
                max_delay: Duration::from_secs(8),
            },
            jitter: Jitter::Equal,
        }
    }
}

impl RetryConfig {
    /// Create a configuration builder
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("retry", "max_attempts must be greater than 0"));
        }

        let BackoffStrategy { base, initial_delay, max_delay } = &self.backoff;
        if *base < 1.0 {
            return Err(ConfigError::new("retry", "exponential base must be at least 1"));
        }
        if max_delay < initial_delay {
            return Err(ConfigError::new(
                "retry",
                "max_delay must not be smaller than initial_delay",
            ));
        }

        Ok(())
    }
}

/// Builder for RetryConfig with fluent API
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    pub fn new() -> Self {
        Self { config: RetryConfig::default() }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    pub fn exponential_backoff(
        mut self,
        initial_delay: Duration,
        base: f64,
        max_delay: Duration,
    ) -> Self {
        self.config.backoff = BackoffStrategy { initial_delay, base, max_delay };
        self
    }

    pub fn no_jitter(mut self) -> Self {
        self.config.jitter = Jitter::None;
        self
    }

    pub fn equal_jitter(mut self) -> Self {
        self.config.jitter = Jitter::Equal;
        self
    }

    pub fn build(self) -> Result<RetryConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// The main retry executor
#[derive(Debug, Clone)]
pub struct RetryExecutor<P> {
    config: RetryConfig,
    policy: P,
}

impl<P> RetryExecutor<P> {
    /// Create a new retry executor with the given configuration and policy
    pub fn new(config: RetryConfig, policy: P) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation with retry logic and return outcome statistics.
    ///
    /// Delays never shrink from one retry to the next, even when jitter or
    /// the cap would otherwise produce a shorter sleep.
    #[instrument(level = "debug", skip(self, operation), fields(max_attempts = self.config.max_attempts))]
    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        P: RetryPolicy<E>,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt: u32 = 0;
        let mut total_delay = Duration::ZERO;
        let mut last_delay = Duration::ZERO;

        loop {
            let attempt_number = attempt + 1;
            debug!("Executing operation (attempt {}/{})", attempt_number, max_attempts);

            let error = match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("Operation succeeded after {} retries", attempt);
                    }
                    return RetryOutcome { result: Ok(value), attempts: attempt_number, total_delay };
                }
                Err(error) => error,
            };

            if self.policy.should_retry(&error, attempt) == RetryDecision::Stop {
                debug!(error = %error, "Retry policy determined not to retry");
                return RetryOutcome { result: Err(error), attempts: attempt_number, total_delay };
            }

            if attempt_number >= max_attempts {
                warn!(error = %error, "All retry attempts exhausted after {} tries", attempt_number);
                return RetryOutcome { result: Err(error), attempts: attempt_number, total_delay };
            }

            let computed = self.config.jitter.apply(self.config.backoff.calculate_delay(attempt));
            let delay = computed.max(last_delay);
            warn!(
                error = %error,
                "Operation failed (attempt {}), retrying after {:?}",
                attempt_number,
                delay
            );

            tokio::time::sleep(delay).await;
            total_delay += delay;
            last_delay = delay;
            attempt += 1;
        }
    }
}
