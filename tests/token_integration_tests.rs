//! Integration Tests for token counting
//!
//! UNIT UNDER TEST: TiktokenCounter
//!
//! TEST COVERAGE:
//!   - Real tokenizer counts for plain and empty text
//!   - Budget checks against prompt text
//!
//! These live here rather than in unit tests because loading the BPE tables is slow.

use client_wrappers::{TiktokenCounter, TokenCounter, WordTokenCounter};

#[test]
fn test_tiktoken_counts_plain_text() {
    // Arrange
    let counter = TiktokenCounter::new().expect("tokenizer loads");

    // Act
    let count = counter.count_tokens("Hello, world!").expect("counts");

    // Assert
    assert!(count > 0);
    assert!(count < 10);
}

#[test]
fn test_tiktoken_empty_text_has_no_tokens() {
    let counter = TiktokenCounter::new().expect("tokenizer loads");
    assert_eq!(counter.count_tokens("").expect("counts"), 0);
}

#[test]
fn test_longer_text_uses_more_tokens() {
    // Arrange
    let counter = TiktokenCounter::new().expect("tokenizer loads");
    let short = "Explain recursion.";
    let long = "Explain recursion with an example in Rust, then compare it to iteration.";

    // Act
    let short_count = counter.count_tokens(short).expect("counts");
    let long_count = counter.count_tokens(long).expect("counts");

    // Assert
    assert!(long_count > short_count);
}

#[test]
fn test_fits_within_budget() {
    // Arrange
    let counter = TiktokenCounter::new().expect("tokenizer loads");
    let prompt = "Write a haiku about programming";
    let count = counter.count_tokens(prompt).expect("counts");

    // Act & Assert
    assert!(counter.fits_within(prompt, count).expect("counts"));
    assert!(!counter.fits_within(prompt, count - 1).expect("counts"));
}

#[test]
fn test_counters_are_usable_as_trait_objects() {
    // Arrange
    let counters: Vec<Box<dyn TokenCounter>> = vec![
        Box::new(WordTokenCounter),
        Box::new(TiktokenCounter::new().expect("tokenizer loads")),
    ];

    // Act & Assert
    for counter in &counters {
        assert!(counter.count_tokens("some words here").expect("counts") > 0);
    }
}
