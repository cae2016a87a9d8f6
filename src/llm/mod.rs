//! LLM provider helper
//!
//! - `client` - [`LlmClient`] and the canned [`Completion`]
//! - `template` - [`PromptTemplate`] placeholder rendering

pub mod client;
pub mod template;

pub use client::{Completion, LlmClient, PROMPT_PREVIEW_CHARS};
pub use template::PromptTemplate;
