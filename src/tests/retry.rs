use crate::error::{ClientError, ClientResult};
use crate::retry::{backoff_delay, RetryConfig, RetryExecutor, DEFAULT_MAX_DELAY};
use crate::tests::helpers::create_fast_test_retry_config;
use std::time::Duration;

// Unit Tests for RetryConfig and the backoff formula
//
// UNIT UNDER TEST: backoff_delay, RetryConfig
//
// BUSINESS RESPONSIBILITY:
//   - Computes exponential backoff as base_delay * backoff_factor ^ attempt
//   - Carries retry defaults (3 attempts, factor 2.0)
//   - Rejects factors below 1.0 and zero attempts
//
// TEST COVERAGE:
//   - Formula against the literal example (1.0, 2.0, 3 -> 8.0)
//   - Defaults and custom values
//   - Validation failures
//   - Delay capping and jitter bounds

#[cfg(test)]
mod retry_config_tests {
    use super::*;

    #[test]
    fn test_backoff_calculation_matches_exponential_formula() {
        // Test verifies 1 * 2^3 == 8

        // Arrange
        let base_delay = 1.0;
        let backoff_factor = 2.0;
        let attempt = 3;

        // Act
        let delay = backoff_delay(base_delay, backoff_factor, attempt);

        // Assert
        assert_eq!(delay, 8.0);
    }

    #[test]
    fn test_backoff_first_attempt_is_base_delay() {
        assert_eq!(backoff_delay(0.5, 3.0, 0), 0.5);
        assert_eq!(backoff_delay(0.5, 3.0, 2), 4.5);
    }

    #[test]
    fn test_default_config_values() {
        // Arrange & Act
        let config = RetryConfig::default();

        // Assert
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff_factor, 2.0);
        assert_eq!(config.base_delay, Duration::from_secs(1));
        assert_eq!(config.max_delay, Some(DEFAULT_MAX_DELAY));
        assert_eq!(config.jitter, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config_keeps_values() {
        // Arrange & Act
        let config = RetryConfig::new(5, 1.5).expect("5 / 1.5 is a valid config");

        // Assert
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.backoff_factor, 1.5);
    }

    #[test]
    fn test_backoff_factor_below_one_is_rejected() {
        // Test verifies shrinking delays are refused at construction

        // Act
        let result = RetryConfig::new(3, 0.5);

        // Assert
        assert!(matches!(
            result,
            Err(ClientError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_zero_retries_is_rejected() {
        // Act
        let result = RetryConfig::new(0, 2.0);

        // Assert
        assert!(matches!(
            result,
            Err(ClientError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_jitter_outside_range_is_rejected() {
        // Arrange
        let config = RetryConfig::default().with_jitter(1.5);

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delay_for_attempt_follows_formula() {
        // Arrange
        let config = RetryConfig::default().with_base_delay(Duration::from_millis(100));

        // Act & Assert
        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(3), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_is_capped_by_max_delay() {
        // Arrange
        let config = RetryConfig::default().with_max_delay(Duration::from_secs(5));

        // Act
        let delay = config.delay_for_attempt(10);

        // Assert
        assert_eq!(delay, Duration::from_secs(5), "1s * 2^10 should cap at 5s");
    }

    #[test]
    fn test_jitter_stays_within_fraction() {
        // Arrange
        let config = RetryConfig::default().with_jitter(0.1);

        // Act & Assert
        for _ in 0..50 {
            let delay = config.delay_for_attempt(2);
            assert!(delay >= Duration::from_secs(4));
            assert!(delay <= Duration::from_millis(4400));
        }
    }

    #[test]
    fn test_default_cap_bounds_large_attempts() {
        // Test verifies many retries never sleep longer than the default cap

        // Arrange
        let config = RetryConfig::new(40, 2.0).expect("valid config");

        // Act
        let delay = config.delay_for_attempt(38);

        // Assert
        assert_eq!(delay, DEFAULT_MAX_DELAY);
        assert_eq!(config.delay_for_attempt(3), Duration::from_secs(8));
    }

    #[test]
    fn test_huge_attempt_saturates_instead_of_panicking() {
        // Arrange
        let config = RetryConfig {
            max_delay: None,
            ..RetryConfig::default()
        };

        // Act
        let delay = config.delay_for_attempt(u32::MAX);

        // Assert
        assert_eq!(delay, Duration::MAX);
    }
}

// Unit Tests for RetryExecutor
//
// UNIT UNDER TEST: RetryExecutor
//
// BUSINESS RESPONSIBILITY:
//   - Repeats retryable failures up to max_retries total attempts
//   - Fails fast on non-retryable errors
//   - Returns the last error when attempts run out
//
// TEST COVERAGE:
//   - Immediate success
//   - Success on the last attempt
//   - Exhaustion and fail-fast paths

#[cfg(test)]
mod retry_executor_tests {
    use super::*;

    fn create_test_executor(max_retries: u32) -> RetryExecutor {
        RetryExecutor::new(create_fast_test_retry_config(max_retries))
    }

    #[test]
    fn test_successful_operation_runs_once() {
        // Arrange
        let executor = create_test_executor(3);
        let mut calls = 0;

        // Act
        let result = executor.execute(|_| {
            calls += 1;
            Ok::<_, ClientError>("success")
        });

        // Assert
        assert_eq!(result.expect("operation succeeds"), "success");
        assert_eq!(calls, 1, "Should only call operation once when successful");
    }

    #[test]
    fn test_success_on_last_attempt_uses_every_attempt() {
        // Test verifies an operation that succeeds on its final attempt is
        // called exactly max_retries times

        // Arrange
        let max_retries = 3;
        let executor = create_test_executor(max_retries);
        let mut attempts = Vec::new();

        // Act
        let result = executor.execute(|attempt| {
            attempts.push(attempt);
            if attempt == max_retries - 1 {
                Ok(true)
            } else {
                Err(ClientError::connection_failed("temporary network failure"))
            }
        });

        // Assert
        assert!(result.expect("last attempt succeeds"));
        assert_eq!(attempts, vec![0, 1, 2]);
    }

    #[test]
    fn test_exhausted_attempts_return_last_error() {
        // Arrange
        let executor = create_test_executor(2);
        let mut calls = 0;

        // Act
        let result: ClientResult<()> = executor.execute(|attempt| {
            calls += 1;
            Err(ClientError::timeout(u64::from(attempt) + 1))
        });

        // Assert
        assert_eq!(calls, 2);
        match result {
            Err(ClientError::Timeout { timeout_seconds }) => assert_eq!(timeout_seconds, 2),
            other => panic!("expected last timeout error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_retryable_error_fails_immediately() {
        // Test verifies authentication failures do not trigger retries

        // Arrange
        let executor = create_test_executor(5);
        let mut calls = 0;

        // Act
        let result: ClientResult<()> = executor.execute(|_| {
            calls += 1;
            Err(ClientError::authentication_failed("invalid api key"))
        });

        // Assert
        assert!(result
            .expect_err("auth failure propagates")
            .to_string()
            .contains("invalid api key"));
        assert_eq!(calls, 1, "Should not retry authentication failures");
    }

    #[test]
    fn test_zero_max_retries_still_attempts_once() {
        // Arrange
        let executor = create_test_executor(0);
        let mut calls = 0;

        // Act
        let result = executor.execute(|_| {
            calls += 1;
            Ok::<_, ClientError>(())
        });

        // Assert
        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }
}
