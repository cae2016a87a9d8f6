//! Token counting utilities.
//!
//! Completions report the requested budget rather than a measurement, so
//! these counters are for callers that want to size prompts themselves.
//!
//! - [`WordTokenCounter`]: whitespace word count, a cheap approximation
//! - [`TiktokenCounter`]: exact `cl100k_base` BPE counts

use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;

use tiktoken_rs::{cl100k_base, CoreBPE};

/// Trait for counting tokens in text.
pub trait TokenCounter: Send + Sync + std::fmt::Debug {
    /// Count tokens in a text string.
    fn count_tokens(&self, text: &str) -> ClientResult<u32>;

    /// Whether `text` fits in `budget` tokens.
    fn fits_within(&self, text: &str, budget: u32) -> ClientResult<bool> {
        Ok(self.count_tokens(text)? <= budget)
    }
}

/// Counts whitespace-separated words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenCounter;

impl TokenCounter for WordTokenCounter {
    fn count_tokens(&self, text: &str) -> ClientResult<u32> {
        let words = text.split_whitespace().count();
        u32::try_from(words).map_err(|_| {
            ClientError::invalid_request(format!("Text has too many words to count: {words}"))
        })
    }
}

/// Token counter backed by the `cl100k_base` encoding.
pub struct TiktokenCounter {
    tokenizer: CoreBPE,
}

impl std::fmt::Debug for TiktokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiktokenCounter")
            .field("encoding", &"cl100k_base")
            .finish()
    }
}

impl TiktokenCounter {
    pub fn new() -> ClientResult<Self> {
        let tokenizer = cl100k_base().map_err(|e| {
            ClientError::configuration_error(format!("Failed to initialize tokenizer: {e}"))
        })?;
        log_debug!(encoding = "cl100k_base", "Tokenizer initialized");
        Ok(Self { tokenizer })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str) -> ClientResult<u32> {
        let tokens = self.tokenizer.encode_with_special_tokens(text).len();
        u32::try_from(tokens).map_err(|_| {
            ClientError::invalid_request(format!("Text has too many tokens to count: {tokens}"))
        })
    }
}
