//! Prompt utilities example: templates and token budgets.
//!
//! # Running
//!
//! ```bash
//! cargo run --example prompt_tools
//! ```

use client_wrappers::{
    LlmClient, PromptTemplate, TiktokenCounter, TokenCounter, WordTokenCounter,
};

fn main() -> anyhow::Result<()> {
    let template = PromptTemplate::new("Translate {text} from {source} to {target}");
    println!("Template variables: {:?}", template.variables());

    let prompt = template.render(&[
        ("text", "Hello, how are you?"),
        ("source", "English"),
        ("target", "French"),
    ])?;
    println!("Rendered prompt: {prompt}");

    let counters: Vec<(&str, Box<dyn TokenCounter>)> = vec![
        ("words", Box::new(WordTokenCounter)),
        ("cl100k_base", Box::new(TiktokenCounter::new()?)),
    ];
    for (name, counter) in &counters {
        println!(
            "{name}: {} tokens (fits in 10: {})",
            counter.count_tokens(&prompt)?,
            counter.fits_within(&prompt, 10)?
        );
    }

    let client = LlmClient::new("openai", Some("sk-example-key-not-real".to_string()))?;
    let completion = client.complete(&prompt, 60)?;
    println!("Completion: {}", completion.text);

    if let Err(e) = template.render(&[("text", "Hello")]) {
        println!("Caught expected error: {e}");
    }

    Ok(())
}
