use crate::config::{resolve_api_key, ApiKeySource, EnvApiKeySource, LlmClientConfig};
use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters of the prompt echoed back in a canned completion.
pub const PROMPT_PREVIEW_CHARS: usize = 50;

/// Canned completion result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    /// Equal to the requested budget; nothing is measured
    pub tokens_used: u32,
    pub model: String,
    pub finish_reason: String,
}

/// LLM provider helper
///
/// Construction resolves an API key: the explicit one if given, otherwise
/// `<PROVIDER>_API_KEY`. Completions are canned and never reach a provider.
///
/// ```rust
/// use client_wrappers::LlmClient;
///
/// let client = LlmClient::new("openai", Some("sk-test".to_string()))?;
/// let completion = client.complete("What is Python?", 10)?;
/// assert_eq!(completion.text, "[Response to: What is Python?...]");
/// assert_eq!(completion.tokens_used, 10);
/// assert_eq!(completion.model, "openai-model");
/// # Ok::<(), client_wrappers::ClientError>(())
/// ```
#[derive(Clone)]
pub struct LlmClient {
    provider: String,
    api_key: String,
    model: String,
    default_max_tokens: u32,
}

impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("default_max_tokens", &self.default_max_tokens)
            .finish()
    }
}

impl LlmClient {
    /// Create a client, falling back to the process environment for the key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if the provider name is
    /// empty or no API key can be resolved.
    pub fn new(provider: impl Into<String>, api_key: Option<String>) -> ClientResult<Self> {
        Self::with_key_source(provider, api_key, &EnvApiKeySource)
    }

    /// Like [`LlmClient::new`], but looks keys up in `source`.
    pub fn with_key_source(
        provider: impl Into<String>,
        api_key: Option<String>,
        source: &dyn ApiKeySource,
    ) -> ClientResult<Self> {
        let mut config = LlmClientConfig::new(provider);
        config.api_key = api_key;
        Self::from_config_with_source(config, source)
    }

    pub fn from_config(config: LlmClientConfig) -> ClientResult<Self> {
        Self::from_config_with_source(config, &EnvApiKeySource)
    }

    pub fn from_config_with_source(
        config: LlmClientConfig,
        source: &dyn ApiKeySource,
    ) -> ClientResult<Self> {
        config.validate()?;
        let model = config.model_name();
        let api_key = resolve_api_key(&config.provider, config.api_key, source)?;

        log_debug!(
            provider = %config.provider,
            model = %model,
            default_max_tokens = config.default_max_tokens,
            "LlmClient created"
        );

        Ok(Self {
            provider: config.provider,
            api_key,
            model,
            default_max_tokens: config.default_max_tokens,
        })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn default_max_tokens(&self) -> u32 {
        self.default_max_tokens
    }

    /// The resolved key, for callers building their own auth headers.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Produce a canned completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the prompt is blank.
    pub fn complete(&self, prompt: &str, max_tokens: u32) -> ClientResult<Completion> {
        if prompt.trim().is_empty() {
            return Err(ClientError::invalid_request("Prompt cannot be empty"));
        }

        let preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();

        log_debug!(
            provider = %self.provider,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            max_tokens = max_tokens,
            "Producing canned completion"
        );

        Ok(Completion {
            text: format!("[Response to: {preview}...]"),
            tokens_used: max_tokens,
            model: self.model.clone(),
            finish_reason: "stop".to_string(),
        })
    }

    /// [`LlmClient::complete`] with the configured default budget.
    pub fn complete_with_defaults(&self, prompt: &str) -> ClientResult<Completion> {
        self.complete(prompt, self.default_max_tokens)
    }
}
