//! Client configuration.
//!
//! [`HttpClientConfig`] and [`LlmClientConfig`] are plain values with
//! `serde` support. The `from_env` constructors and [`EnvApiKeySource`] are
//! the only places that read environment variables.

use crate::error::{ClientError, ClientResult};
use crate::http::auth::is_credential_header;
use crate::http::Auth;
use crate::logging::log_debug;
use crate::retry::RetryConfig;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default request timeout stored on HTTP clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default completion budget for [`crate::LlmClient::complete_with_defaults`].
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Default provider when `LLM_PROVIDER` is not set.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Where API keys come from when none is passed explicitly.
#[cfg_attr(test, mockall::automock)]
pub trait ApiKeySource: Send + Sync {
    /// Look up the value of `variable`, if any.
    fn lookup(&self, variable: &str) -> Option<String>;
}

/// Reads API keys from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvApiKeySource;

impl ApiKeySource for EnvApiKeySource {
    fn lookup(&self, variable: &str) -> Option<String> {
        std::env::var(variable).ok()
    }
}

/// Environment variable holding the API key for `provider`.
///
/// ```rust
/// use client_wrappers::config::api_key_env_var;
///
/// assert_eq!(api_key_env_var("openai"), "OPENAI_API_KEY");
/// ```
pub fn api_key_env_var(provider: &str) -> String {
    format!("{}_API_KEY", provider.to_uppercase())
}

/// Pick the explicit key if present, otherwise ask `source` for
/// `<PROVIDER>_API_KEY`. Empty strings count as missing.
///
/// # Errors
///
/// Returns [`ClientError::ConfigurationError`] if neither yields a key.
pub fn resolve_api_key(
    provider: &str,
    explicit: Option<String>,
    source: &dyn ApiKeySource,
) -> ClientResult<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        log_debug!(provider = %provider, key_source = "explicit", "API key resolved");
        return Ok(key);
    }

    let variable = api_key_env_var(provider);
    match source.lookup(&variable).filter(|k| !k.is_empty()) {
        Some(key) => {
            log_debug!(
                provider = %provider,
                key_source = %variable,
                "API key resolved"
            );
            Ok(key)
        }
        None => Err(ClientError::configuration_error(format!(
            "API key required for {provider}"
        ))),
    }
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// Parse an optional environment variable.
fn env_param<T: FromStr>(name: &str) -> ClientResult<Option<T>>
where
    T::Err: fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            ClientError::configuration_error(format!("Invalid value for {name}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}

/// Settings for [`crate::HttpClient`]
#[derive(Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Base URL for all requests; trailing slashes are trimmed by the client
    pub base_url: String,
    /// Stored on every prepared request, never enforced
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub auth: Option<Auth>,
}

impl fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let shown = if is_credential_header(name) {
                    "<redacted>"
                } else {
                    value.as_str()
                };
                (name.as_str(), shown)
            })
            .collect();
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("headers", &headers)
            .field("retry", &self.retry)
            .field("auth", &self.auth)
            .finish()
    }
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
            retry: RetryConfig::default(),
            auth: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if:
    /// - the base URL does not parse or is not `http`/`https`
    /// - the timeout is zero
    /// - the retry config is invalid
    pub fn validate(&self) -> ClientResult<()> {
        self.parsed_base_url()?;
        if self.timeout.is_zero() {
            return Err(ClientError::configuration_error(
                "timeout must be greater than zero",
            ));
        }
        self.retry.validate()
    }

    /// The base URL as a parsed [`Url`].
    pub fn parsed_base_url(&self) -> ClientResult<Url> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            ClientError::configuration_error(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::configuration_error(format!(
                "Unsupported URL scheme '{other}' in base URL '{}'",
                self.base_url
            ))),
        }
    }

    /// Default headers plus auth, as a [`HeaderMap`].
    pub fn header_map(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientError::configuration_error(format!("Invalid header name '{name}': {e}"))
            })?;
            let mut value = HeaderValue::from_str(value).map_err(|e| {
                ClientError::configuration_error(format!("Invalid value for header '{name}': {e}"))
            })?;
            if is_credential_header(name.as_str()) {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }
        if let Some(auth) = &self.auth {
            auth.apply(&mut headers)?;
        }
        Ok(headers)
    }

    /// Load configuration from environment variables
    ///
    /// Reads `HTTP_BASE_URL` (required), `HTTP_TIMEOUT_SECS`,
    /// `HTTP_MAX_RETRIES`, `HTTP_BACKOFF_FACTOR` and `HTTP_BEARER_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if `HTTP_BASE_URL` is
    /// missing, a numeric variable does not parse, or validation fails.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var("HTTP_BASE_URL").map_err(|_| {
            ClientError::configuration_error("HTTP_BASE_URL environment variable is required")
        })?;

        let mut config = Self::new(base_url);
        if let Some(secs) = env_param::<u64>("HTTP_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(max_retries) = env_param::<u32>("HTTP_MAX_RETRIES")? {
            config.retry.max_retries = max_retries;
        }
        if let Some(backoff_factor) = env_param::<f64>("HTTP_BACKOFF_FACTOR")? {
            config.retry.backoff_factor = backoff_factor;
        }
        if let Ok(token) = std::env::var("HTTP_BEARER_TOKEN") {
            config.auth = Some(Auth::bearer(token));
        }

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            max_retries = config.retry.max_retries,
            has_auth = config.auth.is_some(),
            "HTTP client configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Settings for [`crate::LlmClient`]
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmClientConfig {
    /// Provider name, e.g. "openai" or "anthropic"
    pub provider: String,
    /// Explicit key; when absent `<PROVIDER>_API_KEY` is consulted
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name; defaults to `<provider>-model`
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,
}

impl fmt::Debug for LlmClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClientConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("default_max_tokens", &self.default_max_tokens)
            .finish()
    }
}

impl LlmClientConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: None,
            model: None,
            default_max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_default_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = max_tokens;
        self
    }

    /// Model name used in completions.
    pub fn model_name(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| format!("{}-model", self.provider))
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.provider.trim().is_empty() {
            return Err(ClientError::configuration_error(
                "Provider name is required",
            ));
        }
        if self.default_max_tokens == 0 {
            return Err(ClientError::configuration_error(
                "default_max_tokens must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Reads `LLM_PROVIDER` (default "openai"), `LLM_MODEL` and
    /// `LLM_MAX_TOKENS`. The API key is left unset so the client resolves
    /// it from `<PROVIDER>_API_KEY` at construction.
    pub fn from_env() -> ClientResult<Self> {
        let provider =
            std::env::var("LLM_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string());

        let mut config = Self::new(provider);
        config.model = std::env::var("LLM_MODEL").ok();
        if let Some(max_tokens) = env_param::<u32>("LLM_MAX_TOKENS")? {
            config.default_max_tokens = max_tokens;
        }

        config.validate()?;

        log_debug!(
            provider = %config.provider,
            model = %config.model_name(),
            "LLM client configuration loaded from environment"
        );

        Ok(config)
    }
}
