//! # client-wrappers
//!
//! Thin client wrappers for HTTP APIs and LLM providers.
//!
//! ## Key Features
//!
//! - **Request shaping**: base URL joining, default headers, JSON bodies, request ids
//! - **Canned responses**: GET/POST/PUT/DELETE answer 200/201/200/204 without network I/O
//! - **Retry configuration**: exponential backoff (`base * factor^attempt`) and a retry loop
//! - **LLM helper**: API key resolution from `<PROVIDER>_API_KEY` and canned completions
//! - **Utilities**: auth headers, prompt templates, token counting
//!
//! ## Example
//!
//! ```rust
//! use client_wrappers::{HttpClient, HttpClientConfig, LlmClient, RetryConfig};
//!
//! # fn example() -> client_wrappers::ClientResult<()> {
//! let http = HttpClient::new(
//!     HttpClientConfig::new("https://api.example.com")
//!         .with_header("Content-Type", "application/json")
//!         .with_retry(RetryConfig::new(5, 2.0)?),
//! )?;
//! let response = http.get("/users")?;
//! assert_eq!(response.status_code, 200);
//!
//! let llm = LlmClient::new("openai", Some("sk-example".to_string()))?;
//! let completion = llm.complete("Explain what machine learning is.", 150)?;
//! assert_eq!(completion.tokens_used, 150);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod http;
pub(crate) mod internals;
pub mod llm;

pub use internals::{retry, tokens};

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    api_key_env_var, resolve_api_key, ApiKeySource, EnvApiKeySource, HttpClientConfig,
    LlmClientConfig,
};
pub use error::{ClientError, ClientResult, ErrorCategory, ErrorSeverity};
pub use http::{Auth, CannedTransport, HttpClient, PreparedRequest, Response, Transport};
pub use llm::{Completion, LlmClient, PromptTemplate};
pub use retry::{backoff_delay, RetryConfig, RetryExecutor};
pub use tokens::{TiktokenCounter, TokenCounter, WordTokenCounter};
