//! Retry configuration and exponential backoff
//!
//! - [`backoff_delay`]: `base_delay * backoff_factor ^ attempt`
//! - [`RetryConfig`]: the value holder carried by HTTP clients
//! - [`RetryExecutor`]: runs an operation until it succeeds, fails with a
//!   non-retryable error, or runs out of attempts

use crate::error::{ClientError, ClientResult};
use crate::logging::{log_debug, log_error};

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Exponential backoff delay for a 0-based attempt number.
///
/// ```rust
/// use client_wrappers::retry::backoff_delay;
///
/// assert_eq!(backoff_delay(1.0, 2.0, 3), 8.0);
/// ```
pub fn backoff_delay(base_delay: f64, backoff_factor: f64, attempt: u32) -> f64 {
    let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
    base_delay * backoff_factor.powi(exponent)
}

/// Default upper bound on a single backoff delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(16);

/// Retry behavior for client requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_retries: u32,
    /// Multiplier applied per attempt, never below 1.0
    pub backoff_factor: f64,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Upper bound on a single delay, `None` for uncapped
    pub max_delay: Option<Duration>,
    /// Random extra delay as a fraction of the computed delay, in `[0, 1)`
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 2.0,
            base_delay: Duration::from_secs(1),
            max_delay: Some(DEFAULT_MAX_DELAY),
            jitter: 0.0,
        }
    }
}

impl RetryConfig {
    /// Create a validated config with the default base delay and no jitter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if `max_retries` is zero
    /// or `backoff_factor` is below 1.0.
    pub fn new(max_retries: u32, backoff_factor: f64) -> ClientResult<Self> {
        let config = Self {
            max_retries,
            backoff_factor,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Check the invariants a struct literal can bypass.
    pub fn validate(&self) -> ClientResult<()> {
        if self.max_retries == 0 {
            return Err(ClientError::configuration_error(
                "max_retries must be at least 1",
            ));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 1.0 {
            return Err(ClientError::configuration_error(format!(
                "backoff_factor must be >= 1.0, got {}",
                self.backoff_factor
            )));
        }
        if !(0.0..1.0).contains(&self.jitter) {
            return Err(ClientError::configuration_error(format!(
                "jitter must be in [0, 1), got {}",
                self.jitter
            )));
        }
        Ok(())
    }

    /// Delay to wait after the given 0-based attempt fails.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let seconds = backoff_delay(self.base_delay.as_secs_f64(), self.backoff_factor, attempt);
        let mut delay = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);

        if let Some(max_delay) = self.max_delay {
            delay = delay.min(max_delay);
        }

        if self.jitter > 0.0 {
            let extra = delay.as_secs_f64() * self.jitter * fastrand::f64();
            delay = delay.saturating_add(Duration::try_from_secs_f64(extra).unwrap_or_default());
        }

        delay
    }
}

/// Synchronous retry loop driven by a [`RetryConfig`]
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `operation` with 0-based attempt numbers.
    ///
    /// Retryable errors sleep for [`RetryConfig::delay_for_attempt`] and try
    /// again; anything else is returned immediately. After `max_retries`
    /// attempts the last error is returned.
    pub fn execute<F, T>(&self, mut operation: F) -> ClientResult<T>
    where
        F: FnMut(u32) -> ClientResult<T>,
    {
        let max_attempts = self.config.max_retries.max(1);
        let start_time = Instant::now();
        let mut attempt = 0;

        loop {
            log_debug!(
                attempt = attempt,
                max_attempts = max_attempts,
                "Executing request with retry logic"
            );

            let error = match operation(attempt) {
                Ok(value) => {
                    log_debug!(
                        attempt = attempt,
                        duration_ms = start_time.elapsed().as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(error) => error,
            };

            if !error.is_retryable() {
                log_debug!(attempt = attempt, error = %error, "Error is not retryable");
                return Err(error);
            }

            if attempt + 1 >= max_attempts {
                log_error!(
                    attempts = attempt + 1,
                    total_duration_ms = start_time.elapsed().as_millis(),
                    error = %error,
                    "Request failed after all retry attempts"
                );
                return Err(error);
            }

            let delay = self.config.delay_for_attempt(attempt);
            log_debug!(
                attempt = attempt,
                delay_ms = delay.as_millis(),
                error = %error,
                "Request failed, retrying after delay"
            );
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            attempt += 1;
        }
    }
}
