//! Test helper utilities for client-wrappers integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use client_wrappers::{
    CannedTransport, ClientResult, HttpClient, HttpClientConfig, PreparedRequest, Response,
    RetryConfig, Transport,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE_URL: &str = "https://api.example.com";

mockall::mock! {
    pub ScriptedTransport {}

    impl Transport for ScriptedTransport {
        fn send(&self, request: &PreparedRequest) -> ClientResult<Response>;
    }
}

/// Retry config that never sleeps
pub fn fast_retry_config(max_retries: u32) -> RetryConfig {
    RetryConfig::new(max_retries, 2.0)
        .expect("test retry config should be valid")
        .with_base_delay(Duration::ZERO)
}

/// Create an HTTP client with JSON headers and a fast retry policy
///
/// # Panics
///
/// Panics if the configuration is rejected (test failure is appropriate).
pub fn create_test_http_client(base_url: &str) -> HttpClient {
    HttpClient::new(
        HttpClientConfig::new(base_url)
            .with_header("Content-Type", "application/json")
            .with_retry(fast_retry_config(3)),
    )
    .expect("test HTTP config should be valid")
}

/// Canned transport that remembers every request it saw
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    seen: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.seen.lock().expect("lock not poisoned").clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &PreparedRequest) -> ClientResult<Response> {
        self.seen
            .lock()
            .expect("lock not poisoned")
            .push(request.clone());
        CannedTransport.send(request)
    }
}
