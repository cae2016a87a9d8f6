//! Test helper utilities for client-wrappers tests
//!
//! These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::{HttpClientConfig, MockApiKeySource};
use crate::http::HttpClient;
use crate::retry::RetryConfig;
use std::time::Duration;

pub const TEST_BASE_URL: &str = "https://api.example.com";

/// Retry config with zero delays so retry tests never sleep
pub fn create_fast_test_retry_config(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff_factor: 2.0,
        base_delay: Duration::ZERO,
        max_delay: None,
        jitter: 0.0,
    }
}

pub fn create_test_http_config() -> HttpClientConfig {
    HttpClientConfig::new(TEST_BASE_URL)
        .with_header("Content-Type", "application/json")
        .with_retry(create_fast_test_retry_config(3))
}

/// Create an HTTP client against the example base URL
///
/// # Panics
///
/// Panics if the client cannot be created (test failure is appropriate).
pub fn create_test_http_client() -> HttpClient {
    HttpClient::new(create_test_http_config()).expect("test HTTP config should be valid")
}

/// Key source that knows nothing
pub fn create_empty_key_source() -> MockApiKeySource {
    let mut source = MockApiKeySource::new();
    source.expect_lookup().returning(|_| None);
    source
}

/// Key source that answers exactly one variable
pub fn create_key_source_with(variable: &'static str, key: &'static str) -> MockApiKeySource {
    let mut source = MockApiKeySource::new();
    source
        .expect_lookup()
        .returning(move |name| (name == variable).then(|| key.to_string()));
    source
}
