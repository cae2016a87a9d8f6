//! Error types for client operations.
//!
//! [`ClientError`] covers every failure mode of the HTTP and LLM wrappers:
//! - Configuration errors (missing API keys, invalid base URLs or headers)
//! - Invalid requests (empty prompts, zero token budgets, bad endpoints)
//! - Transport failures (connection, timeout, rate limiting, HTTP status)
//! - Serialization and prompt template errors
//!
//! Use the constructor methods rather than building variants directly; they
//! log the error with structured fields at the appropriate level.
//!
//! ```rust
//! use client_wrappers::{ClientError, ClientResult};
//!
//! fn check(prompt: &str) -> ClientResult<()> {
//!     if prompt.is_empty() {
//!         return Err(ClientError::invalid_request("Prompt cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = check("").unwrap_err();
//! assert!(!err.is_retryable());
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The remote side (or the transport standing in for it) failed.
    External,

    /// Something is wrong inside the crate itself.
    Internal,

    /// The caller can fix this: configuration, credentials, input.
    Client,

    /// Temporary failures that should be retried with backoff.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but the process is stable.
    Error,

    /// Unexpected but recoverable.
    Warning,

    /// Expected failure, such as a validation error.
    Info,
}

/// Convenient result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while shaping requests or building clients.
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ConfigurationError` | Client | No |
/// | `InvalidRequest` | Client | No |
/// | `ConnectionFailed` | External | Yes |
/// | `Timeout` | Transient | Yes |
/// | `HttpStatus` | Client (4xx) / External (5xx) | 429 and 5xx only |
/// | `AuthenticationFailed` | Client | No |
/// | `RateLimitExceeded` | Transient | Yes |
/// | `SerializationError` | Internal | No |
/// | `TemplateVariableMissing` | Client | No |
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client configuration is invalid or incomplete.
    ///
    /// Raised when an LLM client has no resolvable API key, or when an HTTP
    /// client is given a malformed base URL, header or retry setting.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The request itself is malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// The transport could not reach the remote host.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Description of the failure.
        message: String,
    },

    /// The transport gave up waiting.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_seconds: u64,
    },

    /// The response carried an error status code.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus {
        /// The status code of the response.
        status: u16,
        /// The URL or endpoint the request was sent to.
        url: String,
    },

    /// Credentials were rejected.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },

    /// The remote side is throttling requests.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Recommended wait time before retrying.
        retry_after_seconds: u64,
    },

    /// A body or payload could not be converted to or from JSON.
    #[error("Serialization failed: {message}")]
    SerializationError {
        /// Details from the serializer.
        message: String,
    },

    /// A prompt template was rendered without one of its variables.
    #[error("Missing template variable: {name}")]
    TemplateVariableMissing {
        /// The placeholder that had no value.
        name: String,
    },
}

impl ClientError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::InvalidRequest { .. } => ErrorCategory::Client,
            Self::ConnectionFailed { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::HttpStatus { status, .. } => match status {
                429 => ErrorCategory::Transient,
                s if *s >= 500 => ErrorCategory::External,
                _ => ErrorCategory::Client,
            },
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
            Self::SerializationError { .. } => ErrorCategory::Internal,
            Self::TemplateVariableMissing { .. } => ErrorCategory::Client,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::InvalidRequest { .. } => ErrorSeverity::Info,
            Self::ConnectionFailed { .. } => ErrorSeverity::Error,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Error,
            Self::HttpStatus { .. } => ErrorSeverity::Warning,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::RateLimitExceeded { .. } => ErrorSeverity::Warning,
            Self::SerializationError { .. } => ErrorSeverity::Error,
            Self::TemplateVariableMissing { .. } => ErrorSeverity::Info,
        }
    }

    /// Whether this error is transient and worth another attempt.
    ///
    /// True for connection failures, timeouts, rate limits, and HTTP 429 or
    /// 5xx statuses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. }
            | Self::Timeout { .. }
            | Self::RateLimitExceeded { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Convert to a message that is safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "Client configuration issue. Please check your settings".to_string()
            }
            Self::InvalidRequest { message } => format!("Invalid request: {message}"),
            Self::ConnectionFailed { .. } => {
                "Unable to reach the service. Please try again".to_string()
            }
            Self::Timeout { .. } => "Request timed out. Please try again".to_string(),
            Self::HttpStatus { status, .. } => {
                format!("The service responded with status {status}")
            }
            Self::AuthenticationFailed { .. } => {
                "Authentication failed. Please check your credentials".to_string()
            }
            Self::RateLimitExceeded {
                retry_after_seconds,
            } => {
                format!("Service is busy. Please wait {retry_after_seconds} seconds and try again")
            }
            Self::SerializationError { .. } => "Unable to process request data".to_string(),
            Self::TemplateVariableMissing { name } => {
                format!("The prompt is missing a value for '{name}'")
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Client configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_request",
            message = %message,
            "Request rejected before dispatch"
        );
        Self::InvalidRequest { message }
    }

    pub fn connection_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "connection_failed",
            message = %message,
            "Connection to remote host failed"
        );
        Self::ConnectionFailed { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        log_warn!(
            error_type = "http_status",
            status = status,
            url = %url,
            "Response carried an error status"
        );
        Self::HttpStatus { status, url }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "Authentication failed"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "Rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "serialization_error",
            message = %message,
            "JSON conversion failed"
        );
        Self::SerializationError { message }
    }

    pub fn template_variable_missing(name: impl Into<String>) -> Self {
        let name = name.into();
        log_warn!(
            error_type = "template_variable_missing",
            variable = %name,
            "Prompt template rendered without a required variable"
        );
        Self::TemplateVariableMissing { name }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}
