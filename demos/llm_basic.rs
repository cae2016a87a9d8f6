//! Basic LLM client example demonstrating key resolution and completions.
//!
//! This example shows how to:
//! - Create a client whose API key comes from `<PROVIDER>_API_KEY`
//! - Request a completion
//! - Use several providers side by side
//! - Handle a missing API key
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! export ANTHROPIC_API_KEY="sk-ant-..."
//! cargo run --example llm_basic
//! ```

use client_wrappers::{ClientError, LlmClient};

fn main() -> anyhow::Result<()> {
    println!("Example 1: Basic Completion");
    println!("{}", "-".repeat(50));

    match LlmClient::new("openai", None) {
        Ok(client) => {
            let prompt = "Explain what machine learning is in simple terms.";
            let response = client.complete(prompt, 150)?;
            println!("Prompt: {prompt}");
            println!("Response: {}", response.text);
            println!("Tokens used: {}", response.tokens_used);
            println!("Model: {}", response.model);
        }
        Err(e @ ClientError::ConfigurationError { .. }) => {
            println!("{e}");
            println!("Please set OPENAI_API_KEY environment variable");
        }
        Err(e) => return Err(e.into()),
    }

    println!("\nExample 2: Using Multiple Providers");
    println!("{}", "-".repeat(50));

    let prompt = "What is Python?";
    for provider in ["openai", "anthropic"] {
        match LlmClient::new(provider, None) {
            Ok(client) => println!("{provider}: {}", client.complete_with_defaults(prompt)?.text),
            Err(_) => println!("{provider}: API key not configured"),
        }
    }

    println!("\nExample 3: Error Handling");
    println!("{}", "-".repeat(50));

    if let Err(e) = LlmClient::new("test_provider", None) {
        println!("Caught expected error: {e}");
        println!("User message: {}", e.user_message());
    }

    Ok(())
}
